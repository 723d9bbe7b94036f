use crate::coords::Rect;
use crate::paint::{BlendMode, Paint};

use super::Canvas;

/// Renderer-agnostic draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect { rect: Rect, paint: Paint, blend: BlendMode },
    PushLayer,
    PopLayer,
}

/// Recorded draw stream for a frame.
///
/// Commands are kept in submission order; layers must be balanced.
/// `clear()` keeps the allocation so a host can reuse one list per frame.
#[derive(Debug, Default)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
    depth: usize,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
        self.depth = 0;
    }

    #[inline]
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Current layer nesting depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Iterates the rect fills only, skipping layer markers.
    pub fn fills(&self) -> impl Iterator<Item = (&Rect, &Paint, BlendMode)> {
        self.cmds.iter().filter_map(|cmd| match cmd {
            DrawCmd::FillRect { rect, paint, blend } => Some((rect, paint, *blend)),
            _ => None,
        })
    }
}

impl Canvas for DrawList {
    fn fill_rect(&mut self, rect: Rect, paint: &Paint, blend: BlendMode) {
        self.cmds.push(DrawCmd::FillRect { rect, paint: paint.clone(), blend });
    }

    fn push_layer(&mut self) {
        self.depth += 1;
        self.cmds.push(DrawCmd::PushLayer);
    }

    /// # Panics
    /// Panics (debug only) if called without a matching `push_layer`.
    fn pop_layer(&mut self) {
        debug_assert!(self.depth > 0, "pop_layer called without matching push_layer");
        self.depth = self.depth.saturating_sub(1);
        self.cmds.push(DrawCmd::PopLayer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn records_in_order_and_tracks_depth() {
        let mut list = DrawList::new();
        list.push_layer();
        list.fill_rect(Rect::from_size(10.0, 10.0), &Paint::solid(Color::transparent()), BlendMode::SrcOver);
        assert_eq!(list.depth(), 1);
        list.pop_layer();

        assert_eq!(list.depth(), 0);
        assert_eq!(list.cmds().len(), 3);
        assert_eq!(list.cmds()[0], DrawCmd::PushLayer);
        assert_eq!(list.fills().count(), 1);

        list.clear();
        assert!(list.is_empty());
    }
}
