use shimmer_engine::canvas::Canvas;
use shimmer_engine::coords::Rect;
use shimmer_engine::paint::{BlendMode, Color, Paint};

/// Whatever a [`ShimmerLayout`](crate::ShimmerLayout) shows beneath its
/// shimmer.
///
/// Closures taking `(&mut dyn Canvas, Rect)` implement it, so ad-hoc
/// content needs no wrapper type:
///
/// ```rust
/// use shimmer_engine::canvas::Canvas;
/// use shimmer_engine::coords::Rect;
/// use shimmer_engine::paint::{BlendMode, Color, Paint};
/// use shimmer_ui::ShimmerLayout;
///
/// let layout = ShimmerLayout::new(|canvas: &mut dyn Canvas, rect: Rect| {
///     let grey = Color::from_straight(0.8, 0.8, 0.8, 1.0);
///     canvas.fill_rect(rect, &Paint::solid(grey), BlendMode::SrcOver);
/// });
/// # drop(layout);
/// ```
pub trait Content: 'static {
    /// Draws into `rect`, the space allocated to the layout.
    fn paint(&self, canvas: &mut dyn Canvas, rect: Rect);
}

impl<F> Content for F
where
    F: Fn(&mut dyn Canvas, Rect) + 'static,
{
    fn paint(&self, canvas: &mut dyn Canvas, rect: Rect) {
        self(canvas, rect)
    }
}

/// Skeleton content: solid bars standing in for text and images that are
/// still loading.
///
/// Bars are positioned relative to the layout origin and clipped to it.
///
/// ```rust,ignore
/// Placeholder::new(grey)
///     .bar(Rect::new(8.0, 8.0, 48.0, 48.0))    // avatar
///     .bar(Rect::new(64.0, 12.0, 160.0, 12.0)) // title line
///     .bar(Rect::new(64.0, 32.0, 96.0, 12.0))  // subtitle line
/// ```
#[derive(Debug, Clone)]
pub struct Placeholder {
    color: Color,
    bars: Vec<Rect>,
}

impl Placeholder {
    pub fn new(color: impl Into<Color>) -> Self {
        Self { color: color.into(), bars: Vec::new() }
    }

    pub fn bar(mut self, rect: Rect) -> Self {
        self.bars.push(rect);
        self
    }

    #[inline]
    pub fn bars(&self) -> &[Rect] {
        &self.bars
    }
}

impl Content for Placeholder {
    fn paint(&self, canvas: &mut dyn Canvas, rect: Rect) {
        let paint = Paint::solid(self.color);
        for bar in &self.bars {
            let placed = Rect {
                origin: rect.origin + bar.origin,
                size: bar.size,
            };
            if let Some(visible) = placed.intersect(rect) {
                canvas.fill_rect(visible, &paint, BlendMode::SrcOver);
            }
        }
    }
}
