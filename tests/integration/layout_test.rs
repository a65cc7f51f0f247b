//! Layout properties through the public library API.

use uptane_banners::render::{left_fill, wrap_paragraph, Background, TEXT_MARGIN};
use uptane_banners::{render, Banner, BodyText, Dimensions, LayoutError, RenderOptions};

fn art(lines: &[&str]) -> Banner {
    Banner::new(lines.iter().map(|l| l.to_string()).collect()).unwrap()
}

#[test]
fn narrower_banners_split_the_gap_evenly_or_right_heavy() {
    let banner = art(&["<==>", "<>", "<====>"]);
    let width = banner.width();

    for columns in width as u16..=50 {
        let out = render(&banner, &RenderOptions::default(), Dimensions::new(5, columns)).unwrap();
        let left = left_fill(width, columns as usize);
        assert_eq!(left, (columns as usize - width) / 2);

        for (line, original) in out.iter().zip(banner.lines()) {
            let right = columns as usize - left - original.len();
            assert_eq!(line, &format!("{}{}{}", " ".repeat(left), original, " ".repeat(right)));
        }
    }
}

#[test]
fn any_wider_banner_is_rejected() {
    let banner = art(&["0123456789"]);
    for columns in 1..10u16 {
        assert_eq!(
            render(&banner, &RenderOptions::default(), Dimensions::new(5, columns)),
            Err(LayoutError::BannerTooWide {
                width: 10,
                columns: columns as usize
            })
        );
    }
}

#[test]
fn height_error_iff_banner_plus_text_exceeds_rows() {
    let columns: u16 = 40;
    let text = "the quick brown fox jumps over the lazy dog again and again until tired";
    let wrapped = wrap_paragraph(text, columns as usize - 2 * TEXT_MARGIN).len();
    let banner = art(&["a", "b", "c"]);
    let options = RenderOptions {
        body_text: Some(BodyText::Text(text.to_string())),
        ..Default::default()
    };

    for rows in 1..20u16 {
        let result = render(&banner, &options, Dimensions::new(rows, columns));
        let too_tall = banner.height() + wrapped > rows as usize;
        assert_eq!(result.is_err(), too_tall, "rows {rows}");
    }
}

#[test]
fn background_fill_example() {
    let options = RenderOptions::default().background(Background::Magenta);
    let out = render(&art(&["AB"]), &options, Dimensions::new(5, 6)).unwrap();
    // one banner line then 5 - 1 - 1 fill lines
    assert_eq!(out.len(), 4);
}
