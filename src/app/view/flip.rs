//! The turning leaf, drawn over the page while a flip is in flight.

use crate::theme::{INK, PAPER, faded};
use folio_core::{FlipVisuals, Transition};
use iced::alignment::{Horizontal, Vertical};
use iced::mouse;
use iced::widget::canvas::{self, Path, Stroke};
use iced::{Pixels, Point, Rectangle, Renderer, Size, Theme};

/// Narrower than this and the leaf title is not drawn.
const MIN_TITLE_WIDTH: f32 = 120.0;
const CROSS_FADE_WASH: f32 = 0.45;

pub(super) struct FlipLeaf {
    label: String,
    forward: bool,
    visuals: FlipVisuals,
    cross_fade: bool,
}

impl FlipLeaf {
    pub(super) fn new(transition: Transition, visuals: FlipVisuals, cross_fade: bool) -> Self {
        let chapter = transition.from.chapter();
        FlipLeaf {
            label: format!("{} {}", chapter.icon, chapter.title),
            forward: transition.to > transition.from,
            visuals,
            cross_fade,
        }
    }
}

impl<Message> canvas::Program<Message> for FlipLeaf {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        if self.cross_fade {
            frame.fill_rectangle(Point::ORIGIN, bounds.size(), faded(PAPER, CROSS_FADE_WASH));
            return vec![frame.into_geometry()];
        }

        let outline = leaf_outline(bounds.size(), self.forward, self.visuals);
        let direction = if self.forward { 1.0 } else { -1.0 };
        let shadow_offset = self.visuals.depth * direction;
        let shadow = polygon(
            outline.map(|corner| Point::new(corner.x + shadow_offset, corner.y + self.visuals.depth)),
        );
        frame.fill(&shadow, faded(INK, 0.25));

        let leaf = polygon(outline);
        frame.fill(&leaf, PAPER);
        frame.stroke(&leaf, Stroke::default().with_color(INK).with_width(3.0));

        let leaf_width = (outline[1].x - outline[0].x).abs();
        if leaf_width >= MIN_TITLE_WIDTH {
            let center_x = (outline[0].x + outline[1].x) / 2.0;
            frame.fill_text(canvas::Text {
                content: self.label.clone(),
                position: Point::new(center_x, bounds.height / 2.0),
                color: INK,
                size: Pixels(32.0),
                horizontal_alignment: Horizontal::Center,
                vertical_alignment: Vertical::Center,
                ..canvas::Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}

fn polygon(points: [Point; 4]) -> Path {
    Path::new(|builder| {
        builder.move_to(points[0]);
        for point in &points[1..] {
            builder.line_to(*point);
        }
        builder.close();
    })
}

/// Corners of the leaf's visible front face, clockwise from the spine top.
///
/// The leaf pivots on the left edge when turning forward and on the right
/// edge when turning back. Past a quarter turn the front face is edge-on and
/// collapses onto the spine.
fn leaf_outline(size: Size, forward: bool, visuals: FlipVisuals) -> [Point; 4] {
    let fold = visuals.rotation_deg.to_radians().cos().max(0.0);
    let width = size.width * fold * visuals.scale_x;
    let height = size.height * visuals.scale_y;
    let top = (size.height - height) / 2.0;
    let bottom = top + height;
    let skew = visuals.shear_deg.to_radians().tan() * height / 2.0;

    let (spine, direction) = if forward {
        (0.0, 1.0)
    } else {
        (size.width, -1.0)
    };
    let edge = spine + direction * width;
    [
        Point::new(spine, top),
        Point::new(edge + skew, top),
        Point::new(edge - skew, bottom),
        Point::new(spine, bottom),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::FlipProgress;

    fn page() -> Size {
        Size::new(800.0, 600.0)
    }

    #[test]
    fn resting_leaf_covers_the_page() {
        let outline = leaf_outline(page(), true, FlipVisuals::rest());
        assert_eq!(outline[0], Point::new(0.0, 0.0));
        assert_eq!(outline[1], Point::new(800.0, 0.0));
        assert_eq!(outline[2], Point::new(800.0, 600.0));
    }

    #[test]
    fn leaf_is_edge_on_at_half_turn() {
        let outline = leaf_outline(page(), true, FlipVisuals::at(FlipProgress::new(0.5)));
        let width = (outline[1].x + outline[2].x) / 2.0 - outline[0].x;
        assert!(width.abs() < 1.0, "width={width}");
    }

    #[test]
    fn backward_turn_pivots_on_the_right_edge() {
        let outline = leaf_outline(page(), false, FlipVisuals::at(FlipProgress::new(0.25)));
        assert_eq!(outline[0].x, 800.0);
        assert!(outline[1].x < 800.0);
        assert!(outline[1].x > 0.0);
    }
}
