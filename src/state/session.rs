use tracing::{debug, info};

use super::data::{Variant, VariantImage, ViewMode};
use super::previews::PreviewStore;
use crate::media::loader::LoadedImage;

/// Identity of one upload, issued when the probe starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

/// What happened to a probe result handed to [`Session::commit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Installed into the slot; `replaced` is true if an older image was released
    Committed { replaced: bool },
    /// The slot has moved on (newer upload or reset); the result was dropped
    Stale,
}

#[derive(Debug, Default)]
struct Slot {
    image: Option<VariantImage>,
    pending: Option<RequestId>,
}

/// The upload/compare/reset lifecycle of the two variant slots.
///
/// Uploads are two-phase: [`begin_upload`](Self::begin_upload) marks a request
/// as the slot's pending one, and [`commit`](Self::commit) only accepts the
/// result of that exact request. A slow probe that finishes after a newer
/// selection or a reset therefore cannot overwrite newer state.
#[derive(Debug, Default)]
pub struct Session {
    a: Slot,
    b: Slot,
    view_mode: ViewMode,
    previews: PreviewStore,
    next_request: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, variant: Variant) -> &Slot {
        match variant {
            Variant::A => &self.a,
            Variant::B => &self.b,
        }
    }

    fn slot_mut(&mut self, variant: Variant) -> &mut Slot {
        match variant {
            Variant::A => &mut self.a,
            Variant::B => &mut self.b,
        }
    }

    pub fn image(&self, variant: Variant) -> Option<&VariantImage> {
        self.slot(variant).image.as_ref()
    }

    /// Both slots empty, i.e. the initial upload screen
    pub fn is_empty(&self) -> bool {
        self.a.image.is_none() && self.b.image.is_none()
    }

    pub fn both(&self) -> Option<(&VariantImage, &VariantImage)> {
        Some((self.a.image.as_ref()?, self.b.image.as_ref()?))
    }

    pub fn is_loading(&self, variant: Variant) -> bool {
        self.slot(variant).pending.is_some()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn previews(&self) -> &PreviewStore {
        &self.previews
    }

    /// Start an upload for `variant`, superseding any upload still in flight
    pub fn begin_upload(&mut self, variant: Variant) -> RequestId {
        let request = RequestId(self.next_request);
        self.next_request += 1;

        let slot = self.slot_mut(variant);
        if let Some(previous) = slot.pending.replace(request) {
            debug!(%variant, ?previous, "superseded pending upload");
        }
        request
    }

    /// Install a probe result if `request` is still the slot's pending upload
    pub fn commit(
        &mut self,
        variant: Variant,
        request: RequestId,
        loaded: LoadedImage,
    ) -> CommitOutcome {
        if self.slot(variant).pending != Some(request) {
            debug!(%variant, ?request, name = %loaded.file.name, "dropping stale probe result");
            return CommitOutcome::Stale;
        }

        let preview = self.previews.register(loaded.handle);
        let image = VariantImage {
            file: loaded.file,
            preview,
            dimensions: loaded.dimensions,
        };
        info!(
            %variant,
            path = %image.file.path.display(),
            dimensions = %image.dimensions,
            "variant loaded"
        );

        let slot = self.slot_mut(variant);
        slot.pending = None;
        let previous = slot.image.replace(image);

        let replaced = match previous {
            Some(old) => {
                self.previews.release(old.preview);
                true
            }
            None => false,
        };
        CommitOutcome::Committed { replaced }
    }

    /// Clear the pending marker after a failed probe. Returns false if the
    /// failure belongs to a superseded request.
    pub fn fail(&mut self, variant: Variant, request: RequestId) -> bool {
        let slot = self.slot_mut(variant);
        if slot.pending == Some(request) {
            slot.pending = None;
            true
        } else {
            false
        }
    }

    /// Release both previews and return to the initial empty state
    pub fn reset(&mut self) {
        for variant in Variant::ALL {
            let slot = self.slot_mut(variant);
            let image = slot.image.take();
            slot.pending = None;
            if let Some(image) = image {
                self.previews.release(image.preview);
            }
        }
        self.view_mode = ViewMode::Comparison;
        info!(live_previews = self.previews.live_count(), "comparison reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{Dimensions, SourceFile};
    use iced::widget::image::Handle;
    use std::path::PathBuf;

    fn loaded(name: &str, size: u64, width: u32, height: u32) -> LoadedImage {
        LoadedImage {
            file: SourceFile {
                name: name.to_string(),
                path: PathBuf::from(name),
                size,
                mime: "image/png".to_string(),
            },
            dimensions: Dimensions::new(width, height),
            handle: Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
        }
    }

    fn upload(session: &mut Session, variant: Variant, name: &str) -> CommitOutcome {
        let request = session.begin_upload(variant);
        session.commit(variant, request, loaded(name, 100, 10, 10))
    }

    #[test]
    fn test_initial_state() {
        let session = Session::new();
        assert!(session.is_empty());
        assert!(session.both().is_none());
        assert_eq!(session.view_mode(), ViewMode::Comparison);
        assert_eq!(session.previews().live_count(), 0);
    }

    #[test]
    fn test_commit_installs_image() {
        let mut session = Session::new();
        let request = session.begin_upload(Variant::A);
        assert!(session.is_loading(Variant::A));

        let outcome = session.commit(Variant::A, request, loaded("a.png", 2048, 640, 480));

        assert_eq!(outcome, CommitOutcome::Committed { replaced: false });
        assert!(!session.is_loading(Variant::A));
        let image = session.image(Variant::A).unwrap();
        assert_eq!(image.file.name, "a.png");
        assert_eq!(image.dimensions, Dimensions::new(640, 480));
        assert!(session.previews().handle(image.preview).is_some());
        assert!(session.image(Variant::B).is_none());
        assert!(!session.is_empty());
    }

    #[test]
    fn test_replacement_releases_previous_preview() {
        let mut session = Session::new();
        upload(&mut session, Variant::A, "first.png");
        let old_preview = session.image(Variant::A).unwrap().preview;

        let outcome = upload(&mut session, Variant::A, "second.png");

        assert_eq!(outcome, CommitOutcome::Committed { replaced: true });
        assert!(session.previews().handle(old_preview).is_none());
        assert_eq!(session.previews().live_count(), 1);
        assert_eq!(session.image(Variant::A).unwrap().file.name, "second.png");
    }

    #[test]
    fn test_stale_result_does_not_clobber_newer_upload() {
        let mut session = Session::new();
        let slow = session.begin_upload(Variant::B);
        let fast = session.begin_upload(Variant::B);

        session.commit(Variant::B, fast, loaded("newer.png", 1, 5, 5));
        let outcome = session.commit(Variant::B, slow, loaded("older.png", 1, 9, 9));

        assert_eq!(outcome, CommitOutcome::Stale);
        assert_eq!(session.image(Variant::B).unwrap().file.name, "newer.png");
        assert_eq!(session.previews().live_count(), 1);
    }

    #[test]
    fn test_result_after_reset_is_stale() {
        let mut session = Session::new();
        let request = session.begin_upload(Variant::A);
        session.reset();

        let outcome = session.commit(Variant::A, request, loaded("late.png", 1, 1, 1));

        assert_eq!(outcome, CommitOutcome::Stale);
        assert!(session.is_empty());
        assert_eq!(session.previews().live_count(), 0);
    }

    #[test]
    fn test_slots_are_independent() {
        let mut session = Session::new();
        let a = session.begin_upload(Variant::A);
        let b = session.begin_upload(Variant::B);

        session.commit(Variant::B, b, loaded("b.png", 1, 2, 2));
        session.commit(Variant::A, a, loaded("a.png", 1, 3, 3));

        let (image_a, image_b) = session.both().unwrap();
        assert_eq!(image_a.file.name, "a.png");
        assert_eq!(image_b.file.name, "b.png");
    }

    #[test]
    fn test_request_is_bound_to_its_slot() {
        let mut session = Session::new();
        let request = session.begin_upload(Variant::A);

        let outcome = session.commit(Variant::B, request, loaded("wrong.png", 1, 1, 1));

        assert_eq!(outcome, CommitOutcome::Stale);
        assert!(session.image(Variant::B).is_none());
    }

    #[test]
    fn test_reset_after_both_populated() {
        let mut session = Session::new();
        upload(&mut session, Variant::A, "a.png");
        upload(&mut session, Variant::B, "b.png");
        session.set_view_mode(ViewMode::Detailed);
        assert_eq!(session.previews().live_count(), 2);

        session.reset();

        assert!(session.is_empty());
        assert!(!session.is_loading(Variant::A));
        assert!(!session.is_loading(Variant::B));
        assert_eq!(session.view_mode(), ViewMode::Comparison);
        assert_eq!(session.previews().live_count(), 0);
    }

    #[test]
    fn test_fail_only_clears_current_request() {
        let mut session = Session::new();
        let old = session.begin_upload(Variant::A);
        let current = session.begin_upload(Variant::A);

        assert!(!session.fail(Variant::A, old));
        assert!(session.is_loading(Variant::A));

        assert!(session.fail(Variant::A, current));
        assert!(!session.is_loading(Variant::A));
        assert!(session.image(Variant::A).is_none());
    }

    #[test]
    fn test_failed_replacement_keeps_existing_image() {
        let mut session = Session::new();
        upload(&mut session, Variant::A, "keep.png");

        let request = session.begin_upload(Variant::A);
        session.fail(Variant::A, request);

        assert_eq!(session.image(Variant::A).unwrap().file.name, "keep.png");
        assert_eq!(session.previews().live_count(), 1);
    }
}
