//! Guide painting: render queue → overlay strokes.
//!
//! Runs in the host's post-render phase. Guides are single-frame: the queue
//! is emptied after every paint whether or not anything was drawn.

use crate::surface::OverlaySurface;
use kurbo::Point;
use sg_core::{CrossMark, GuideConfig, LineStyle, MatchKind, RenderQueue, ViewportSnapshot};

/// Draw everything in `queue` on `surface`, then empty the queue.
pub fn paint_guides<S: OverlaySurface + ?Sized>(
    surface: &mut S,
    queue: &mut RenderQueue,
    viewport: &ViewportSnapshot,
    config: &GuideConfig,
) {
    for guide in &queue.matches {
        let style = match guide.kind {
            MatchKind::CanvasCenter => &config.center_line,
            _ => &config.align_line,
        };
        let (start, end) = guide.endpoints();
        surface.stroke_line(viewport.to_device(start), viewport.to_device(end), style);
    }

    for mark in &queue.crosses {
        paint_cross(surface, mark, viewport, config.cross_size, &config.cross_mark);
    }

    log::trace!(
        "painted {} guides, {} crosses",
        queue.matches.len(),
        queue.crosses.len()
    );
    queue.clear();
}

/// Two diagonals of half-length `size` (device pixels) crossing at `mark`.
fn paint_cross<S: OverlaySurface + ?Sized>(
    surface: &mut S,
    mark: &CrossMark,
    viewport: &ViewportSnapshot,
    size: f64,
    style: &LineStyle,
) {
    let c = viewport.to_device(Point::new(mark.x, mark.y));
    surface.stroke_line(
        Point::new(c.x - size, c.y - size),
        Point::new(c.x + size, c.y + size),
        style,
    );
    surface.stroke_line(
        Point::new(c.x - size, c.y + size),
        Point::new(c.x + size, c.y - size),
        style,
    );
}
