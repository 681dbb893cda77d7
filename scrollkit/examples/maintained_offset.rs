// Example: where the offset goes when content grows above the visible region.
use scrollkit::{ContentOffset, Point, Size, maintained_offset};

fn main() {
    let container = Size::new(320.0, 480.0);
    let mut content = Size::new(320.0, 1000.0);
    let mut offset = Point::new(0.0, 120.0);

    for grown in [150.0, 40.0, -600.0] {
        let after = Size::new(content.width, content.height + grown);
        offset = maintained_offset(offset, content, after);
        content = after;
        let reported = ContentOffset {
            offset,
            content_size: content,
            container_size: container,
        };
        println!(
            "grown={grown} offset={:?} relative={:?}",
            offset,
            reported.relative()
        );
    }
}
