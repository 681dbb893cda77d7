use crate::{EdgeInsets, OffsetBehavior, Point, Size, VerticalAlignment, Viewport};

/// What changed the container's visible geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResizeTrigger {
    Bounds,
    KeyboardFrame,
}

impl ResizeTrigger {
    fn flag(self) -> OffsetBehavior {
        match self {
            Self::Bounds => OffsetBehavior::MAINTAIN_ON_BOUNDS_CHANGE,
            Self::KeyboardFrame => OffsetBehavior::MAINTAIN_ON_KEYBOARD_FRAME_CHANGE,
        }
    }
}

/// Runs `mutate` (typically a content change) and keeps the visible content stable afterwards.
///
/// - With [`OffsetBehavior::MAINTAIN_ON_CONTENT_SIZE_CHANGE`], the offset follows the change in
///   content size so the same content stays in view.
/// - Otherwise, with [`OffsetBehavior::SMART_ALIGN_ON_CONTENT_SIZE_CHANGE`], content that was
///   scrolled to the bottom stays at the bottom.
///
/// Nothing is adjusted when the content size did not change.
pub fn with_preserved_offset<V, R>(
    viewport: &mut V,
    behavior: OffsetBehavior,
    animated: bool,
    mutate: impl FnOnce(&mut V) -> R,
) -> R
where
    V: Viewport + ?Sized,
{
    let maintain = behavior.contains(OffsetBehavior::MAINTAIN_ON_CONTENT_SIZE_CHANGE);

    if maintain && viewport.is_scrolling() {
        // Stop the in-flight animation so the offset below is a settled baseline.
        let current = viewport.content_offset();
        viewport.set_content_offset(current, false);
    }

    let before_alignment = viewport.current_vertical_alignment();
    let before_size = viewport.content_size();

    let out = mutate(viewport);

    let after_size = viewport.content_size();
    if after_size == before_size {
        return out;
    }

    if maintain {
        let current = viewport.content_offset();
        let target = maintained_offset(current, before_size, after_size);
        strace!(
            from_x = current.x,
            from_y = current.y,
            to_x = target.x,
            to_y = target.y,
            "with_preserved_offset: maintain"
        );
        if target != current {
            viewport.set_content_offset(target, animated);
        }
    } else if behavior.contains(OffsetBehavior::SMART_ALIGN_ON_CONTENT_SIZE_CHANGE)
        && before_alignment == VerticalAlignment::Bottom
    {
        strace!("with_preserved_offset: smart-align to bottom");
        viewport.set_content_alignment(VerticalAlignment::Bottom, animated);
    }

    out
}

/// Shifts `offset` by the content size change on each axis.
///
/// An axis whose old extent was zero keeps its offset; on other axes the result never goes
/// below zero.
pub fn maintained_offset(offset: Point, before: Size, after: Size) -> Point {
    let axis = |offset: f64, before: f64, after: f64| {
        if before == 0.0 {
            offset
        } else {
            (offset + (after - before)).max(0.0)
        }
    };
    Point::new(
        axis(offset.x, before.width, after.width),
        axis(offset.y, before.height, after.height),
    )
}

/// Runs `mutate` (a bounds or keyboard-frame change) and keeps bottom-anchored content anchored.
///
/// Only acts when `behavior` contains the flag matching `trigger`. Content that rested on the
/// bottom edge is re-aligned to it; anything else is clamped back into the scrollable range.
pub fn with_preserved_offset_across_resize<V, R>(
    viewport: &mut V,
    behavior: OffsetBehavior,
    trigger: ResizeTrigger,
    animated: bool,
    mutate: impl FnOnce(&mut V) -> R,
) -> R
where
    V: Viewport + ?Sized,
{
    if !behavior.contains(trigger.flag()) {
        return mutate(viewport);
    }

    let before_alignment = viewport.current_vertical_alignment();
    let before: (Size, EdgeInsets) = (viewport.bounds_size(), viewport.content_inset());

    let out = mutate(viewport);

    let after = (viewport.bounds_size(), viewport.content_inset());
    if after == before {
        return out;
    }

    if before_alignment == VerticalAlignment::Bottom {
        strace!(trigger = ?trigger, "with_preserved_offset_across_resize: stick to bottom");
        viewport.set_content_alignment(VerticalAlignment::Bottom, animated);
        return out;
    }

    let min = viewport.min_content_offset();
    let max = viewport.max_content_offset();
    let current = viewport.content_offset();
    let clamped = Point::new(current.x.clamp(min.x, max.x), current.y.clamp(min.y, max.y));
    if clamped != current {
        strace!(trigger = ?trigger, "with_preserved_offset_across_resize: clamp");
        viewport.set_content_offset(clamped, animated);
    }
    out
}
