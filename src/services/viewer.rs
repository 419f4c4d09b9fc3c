//! Gallery selection state: category filter, mobile carousel and lightbox,
//! all driven through one reducer.

use crate::models::{Category, PortfolioImage};

/// Images matching `category`, in catalog order. `All` keeps everything.
pub fn filter_images(catalog: &[PortfolioImage], category: Category) -> Vec<PortfolioImage> {
    match category {
        Category::All => catalog.to_vec(),
        selected => catalog
            .iter()
            .filter(|image| image.category == selected)
            .cloned()
            .collect(),
    }
}

/// What the grid area should show
#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    Skeleton,
    Empty,
    Images(Vec<PortfolioImage>),
}

/// `None` means the catalog is still loading.
pub fn grid_view(catalog: Option<&[PortfolioImage]>, category: Category) -> GridView {
    match catalog {
        None => GridView::Skeleton,
        Some(catalog) => {
            let filtered = filter_images(catalog, category);
            if filtered.is_empty() {
                GridView::Empty
            } else {
                GridView::Images(filtered)
            }
        }
    }
}

/// Progress of the full-resolution image in the lightbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open { index: usize, status: ImageStatus },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Tab tap or desktop filter button.
    Select(Category),
    Open(usize),
    Next,
    Previous,
    Close,
    /// Finger moved left: advance the carousel.
    SwipeLeft,
    /// Finger moved right: go back one page.
    SwipeRight,
    CarouselPrev,
    CarouselNext,
    FullImageLoaded,
    FullImageFailed,
}

/// The carousel page is derived from `category`, so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewerState {
    pub category: Category,
    pub lightbox: Lightbox,
}

impl ViewerState {
    pub fn carousel_index(&self) -> usize {
        self.category.position()
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.lightbox {
            Lightbox::Open { index, .. } => Some(index),
            Lightbox::Closed => None,
        }
    }

    pub fn image_status(&self) -> Option<ImageStatus> {
        match self.lightbox {
            Lightbox::Open { status, .. } => Some(status),
            Lightbox::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.lightbox, Lightbox::Open { .. })
    }

    pub fn selected_image<'a>(&self, filtered: &'a [PortfolioImage]) -> Option<&'a PortfolioImage> {
        self.current_index().and_then(|i| filtered.get(i))
    }

    pub fn can_page_back(&self) -> bool {
        self.carousel_index() > 0
    }

    pub fn can_page_forward(&self) -> bool {
        self.carousel_index() + 1 < Category::all().len()
    }

    pub fn reduce(self, action: Action, filtered_len: usize) -> Self {
        reduce(self, action, filtered_len)
    }

    fn with_category(self, category: Category) -> Self {
        if category == self.category {
            return self;
        }
        // The filtered set changes under the lightbox, so close it.
        Self {
            category,
            lightbox: Lightbox::Closed,
        }
    }

    fn page(self, delta: isize) -> Self {
        let last = Category::all().len() - 1;
        let target = self
            .carousel_index()
            .saturating_add_signed(delta)
            .min(last);
        match Category::at(target) {
            Some(category) => self.with_category(category),
            None => self,
        }
    }

    fn with_status(self, status: ImageStatus) -> Self {
        match self.lightbox {
            Lightbox::Open { index, .. } => Self {
                lightbox: Lightbox::Open { index, status },
                ..self
            },
            Lightbox::Closed => self,
        }
    }

    fn jump(self, filtered_len: usize, step: fn(usize, usize) -> usize) -> Self {
        match self.lightbox {
            Lightbox::Open { .. } if filtered_len == 0 => Self {
                lightbox: Lightbox::Closed,
                ..self
            },
            Lightbox::Open { index, status } => {
                let next = step(index, filtered_len);
                // A one-image set stays on the same, already decoded, image.
                let status = if next == index { status } else { ImageStatus::Loading };
                Self {
                    lightbox: Lightbox::Open { index: next, status },
                    ..self
                }
            }
            Lightbox::Closed => self,
        }
    }
}

/// Applies one user action. `filtered_len` is the length of the currently
/// filtered image list.
pub fn reduce(state: ViewerState, action: Action, filtered_len: usize) -> ViewerState {
    match action {
        Action::Select(category) => state.with_category(category),
        Action::CarouselNext | Action::SwipeLeft => state.page(1),
        Action::CarouselPrev | Action::SwipeRight => state.page(-1),
        Action::Open(index) if index < filtered_len => ViewerState {
            lightbox: Lightbox::Open {
                index,
                status: ImageStatus::Loading,
            },
            ..state
        },
        Action::Open(_) => state,
        Action::Next => state.jump(filtered_len, |i, n| (i + 1) % n),
        Action::Previous => state.jump(filtered_len, |i, n| (i % n + n - 1) % n),
        Action::Close => ViewerState {
            lightbox: Lightbox::Closed,
            ..state
        },
        Action::FullImageLoaded => state.with_status(ImageStatus::Loaded),
        Action::FullImageFailed => state.with_status(ImageStatus::Failed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fallback::fallback_images;

    fn catalog() -> Vec<PortfolioImage> {
        fallback_images()
    }

    fn open_at(index: usize) -> ViewerState {
        reduce(ViewerState::default(), Action::Open(index), 5)
    }

    #[test]
    fn next_n_times_is_cyclic() {
        for n in 1..=7 {
            for start in 0..n {
                let mut state = reduce(ViewerState::default(), Action::Open(start), n);
                for _ in 0..n {
                    state = reduce(state, Action::Next, n);
                }
                assert_eq!(state.current_index(), Some(start), "n={n} start={start}");
            }
        }
    }

    #[test]
    fn previous_and_next_cancel() {
        for n in 1..=6 {
            for start in 0..n {
                let open = reduce(ViewerState::default(), Action::Open(start), n);
                let there_and_back = open.reduce(Action::Previous, n).reduce(Action::Next, n);
                let back_and_there = open.reduce(Action::Next, n).reduce(Action::Previous, n);
                assert_eq!(there_and_back.current_index(), Some(start));
                assert_eq!(back_and_there.current_index(), Some(start));
            }
        }
    }

    #[test]
    fn open_two_of_five_then_next_three_times_lands_on_zero() {
        let state = open_at(2)
            .reduce(Action::Next, 5)
            .reduce(Action::Next, 5)
            .reduce(Action::Next, 5);
        assert_eq!(state.current_index(), Some(0));
    }

    #[test]
    fn previous_from_zero_wraps_to_last() {
        assert_eq!(open_at(0).reduce(Action::Previous, 5).current_index(), Some(4));
    }

    #[test]
    fn selected_image_tracks_index() {
        let images = catalog();
        let n = images.len();
        let mut state = reduce(ViewerState::default(), Action::Open(n - 1), n);
        assert_eq!(state.selected_image(&images), images.last());

        state = state.reduce(Action::Next, n);
        assert_eq!(state.selected_image(&images), images.first());

        state = state.reduce(Action::Close, n);
        assert_eq!(state.selected_image(&images), None);
    }

    #[test]
    fn navigation_resets_load_flag() {
        let loaded = open_at(1).reduce(Action::FullImageLoaded, 5);
        assert_eq!(loaded.image_status(), Some(ImageStatus::Loaded));
        assert_eq!(loaded.reduce(Action::Next, 5).image_status(), Some(ImageStatus::Loading));
        assert_eq!(loaded.reduce(Action::Previous, 5).image_status(), Some(ImageStatus::Loading));

        let failed = open_at(1).reduce(Action::FullImageFailed, 5);
        assert_eq!(failed.image_status(), Some(ImageStatus::Failed));
        assert_eq!(failed.reduce(Action::Open(3), 5).image_status(), Some(ImageStatus::Loading));
    }

    #[test]
    fn single_image_keeps_load_flag() {
        let loaded = reduce(ViewerState::default(), Action::Open(0), 1).reduce(Action::FullImageLoaded, 1);
        assert_eq!(loaded.reduce(Action::Next, 1), loaded);
        assert_eq!(loaded.reduce(Action::Previous, 1), loaded);
    }

    #[test]
    fn closed_lightbox_ignores_navigation_and_load_events() {
        let closed = ViewerState::default();
        for action in [Action::Next, Action::Previous, Action::FullImageLoaded, Action::FullImageFailed] {
            assert_eq!(closed.reduce(action, 5), closed);
        }
    }

    #[test]
    fn open_out_of_range_is_ignored() {
        assert!(!reduce(ViewerState::default(), Action::Open(5), 5).is_open());
        assert!(!reduce(ViewerState::default(), Action::Open(0), 0).is_open());
    }

    #[test]
    fn empty_filtered_set_closes_on_navigation() {
        assert!(!open_at(2).reduce(Action::Next, 0).is_open());
    }

    #[test]
    fn filter_all_is_identity() {
        let images = catalog();
        assert_eq!(filter_images(&images, Category::All), images);
        assert!(filter_images(&[], Category::All).is_empty());
    }

    #[test]
    fn filter_is_sound_and_complete() {
        let images = catalog();
        for &category in &Category::all()[1..] {
            let filtered = filter_images(&images, category);
            assert!(filtered.iter().all(|i| i.category == category));
            let expected = images.iter().filter(|i| i.category == category).count();
            assert_eq!(filtered.len(), expected, "{}", category.as_str());
        }
    }

    #[test]
    fn bridal_without_bridal_images_is_empty_state() {
        let images: Vec<_> = catalog()
            .into_iter()
            .filter(|i| i.category != Category::Bridal)
            .collect();
        assert_eq!(grid_view(Some(&images), Category::Bridal), GridView::Empty);
        assert!(matches!(grid_view(Some(&images), Category::All), GridView::Images(v) if v.len() == images.len()));
        assert_eq!(grid_view(None, Category::Bridal), GridView::Skeleton);
    }

    #[test]
    fn carousel_arrows_clamp_at_both_ends() {
        let first = ViewerState::default();
        assert_eq!(first.reduce(Action::CarouselPrev, 0), first);
        assert_eq!(first.reduce(Action::SwipeRight, 0), first);
        assert!(!first.can_page_back());

        let last_category = *Category::all().last().unwrap();
        let last = first.reduce(Action::Select(last_category), 0);
        assert_eq!(last.reduce(Action::CarouselNext, 0), last);
        assert_eq!(last.reduce(Action::SwipeLeft, 0), last);
        assert!(!last.can_page_forward());
    }

    #[test]
    fn carousel_and_category_stay_consistent() {
        let actions = [
            Action::SwipeLeft,
            Action::SwipeLeft,
            Action::CarouselNext,
            Action::Select(Category::Bridal),
            Action::SwipeRight,
            Action::SwipeRight,
            Action::CarouselPrev,
            Action::Select(Category::StainProgression),
            Action::SwipeLeft,
            Action::CarouselNext,
            Action::SwipeRight,
            Action::Select(Category::Festival),
            Action::CarouselPrev,
        ];
        let mut state = ViewerState::default();
        let mut expected = 0usize;
        let last = Category::all().len() - 1;
        for action in actions {
            expected = match action {
                Action::SwipeLeft | Action::CarouselNext => (expected + 1).min(last),
                Action::SwipeRight | Action::CarouselPrev => expected.saturating_sub(1),
                Action::Select(c) => c.position(),
                _ => expected,
            };
            state = state.reduce(action, 3);
            assert_eq!(state.carousel_index(), expected, "{action:?}");
            assert_eq!(Category::all()[state.carousel_index()], state.category);
        }
    }

    #[test]
    fn changing_category_closes_lightbox() {
        let open = open_at(1);
        assert!(!open.reduce(Action::Select(Category::Festival), 5).is_open());
        assert!(!open.reduce(Action::SwipeLeft, 5).is_open());
        // Re-selecting the active tab keeps the viewer open.
        assert!(open.reduce(Action::Select(Category::All), 5).is_open());
    }
}
