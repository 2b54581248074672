use std::time::Duration;

/// Time for one full pass from 0% to -50%.
pub const LOOP_DURATION: Duration = Duration::from_secs(40);

/// Below this many projects the strip is repeated four times instead of
/// twice, so it stays wider than the viewport.
pub const SHORT_LIST: usize = 5;

/// Endlessly scrolling strip of project cards. The display list holds the
/// projects at least twice; scrolling by half its width lands on an
/// identical frame, which is where the animation restarts.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCarousel<T> {
    items: Vec<T>,
}

impl<T: Clone> ProjectCarousel<T> {
    pub fn new(projects: &[T]) -> Self {
        let copies = match projects.len() {
            0 => 0,
            n if n < SHORT_LIST => 4,
            _ => 2,
        };

        let mut items = Vec::with_capacity(projects.len() * copies);
        for _ in 0..copies {
            items.extend_from_slice(projects);
        }
        Self { items }
    }
}

impl<T> ProjectCarousel<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Horizontal offset in percent of the strip width, linear from 0 to
    /// -50 and then back to 0.
    pub fn offset_at(&self, elapsed: Duration) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        let cycle = LOOP_DURATION.as_secs_f64();
        let progress = (elapsed.as_secs_f64() % cycle) / cycle;
        -50.0 * progress
    }
}
