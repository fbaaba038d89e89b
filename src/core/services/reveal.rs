//! Reveal tracker service
//!
//! A [`VisibilityTracker`] watches one element and flips from
//! [`Reveal::Unseen`] to [`Reveal::Revealed`] the first time the element is
//! intersecting the viewport by at least the configured threshold. There is
//! no way back to `Unseen`: the section stays revealed for the tracker's
//! lifetime, even across detach and re-attach.
//!
//! The tracker owns at most one observation at a time. Attaching a different
//! element, detaching, or changing options releases the old observation
//! before anything new is registered, and notifications addressed to a
//! released observation are dropped.

use log::debug;

use crate::core::models::{RevealOptions, SectionId};
use crate::core::ports::{IntersectionEntry, IntersectionSource, ObservationId};

/// Reveal state of a tracked element
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Reveal {
    /// Not yet seen
    #[default]
    Unseen,
    /// Seen at least once; holds the entry that triggered the reveal
    Revealed(IntersectionEntry),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Attachment {
    target: SectionId,
    observation: ObservationId,
}

/// One-way visibility signal for a single element
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityTracker {
    options: RevealOptions,
    state: Reveal,
    attachment: Option<Attachment>,
}

impl VisibilityTracker {
    /// Create an unattached tracker
    #[must_use]
    pub const fn new(options: RevealOptions) -> Self {
        Self {
            options,
            state: Reveal::Unseen,
            attachment: None,
        }
    }

    /// Current options
    #[must_use]
    pub const fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &Reveal {
        &self.state
    }

    /// Whether the element has been seen
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        matches!(self.state, Reveal::Revealed(_))
    }

    /// The entry that revealed the element, if any
    #[must_use]
    pub const fn entry(&self) -> Option<&IntersectionEntry> {
        match &self.state {
            Reveal::Revealed(entry) => Some(entry),
            Reveal::Unseen => None,
        }
    }

    /// Element currently observed
    #[must_use]
    pub fn target(&self) -> Option<&SectionId> {
        self.attachment.as_ref().map(|a| &a.target)
    }

    /// Observation currently held
    #[must_use]
    pub fn observation(&self) -> Option<ObservationId> {
        self.attachment.as_ref().map(|a| a.observation)
    }

    /// Attach to `target`, or detach when `target` is `None`
    ///
    /// Re-attaching the element already observed keeps the existing
    /// observation.
    pub fn attach<S>(&mut self, source: &mut S, target: Option<&SectionId>)
    where
        S: IntersectionSource + ?Sized,
    {
        if let (Some(current), Some(wanted)) = (&self.attachment, target) {
            if &current.target == wanted {
                return;
            }
        }

        self.release(source);

        if let Some(target) = target {
            let observation = source.observe(target, &self.options);
            debug!("Observing '{target}' as {observation}");
            self.attachment = Some(Attachment {
                target: target.clone(),
                observation,
            });
        }
    }

    /// Stop observing; the reveal state is kept
    pub fn detach<S>(&mut self, source: &mut S)
    where
        S: IntersectionSource + ?Sized,
    {
        self.release(source);
    }

    /// Change options, re-establishing the observation when they differ
    pub fn reconfigure<S>(&mut self, source: &mut S, options: RevealOptions)
    where
        S: IntersectionSource + ?Sized,
    {
        if self.options == options {
            return;
        }
        self.options = options;

        if let Some(attachment) = self.attachment.take() {
            source.unobserve(attachment.observation);
            let observation = source.observe(&attachment.target, &self.options);
            debug!(
                "Re-observing '{}' as {observation} (threshold {})",
                attachment.target,
                self.options.threshold()
            );
            self.attachment = Some(Attachment {
                target: attachment.target,
                observation,
            });
        }
    }

    /// Apply a notification from the intersection source
    ///
    /// Returns `true` only for the notification that caused the reveal.
    pub fn notify(&mut self, observation: ObservationId, entry: &IntersectionEntry) -> bool {
        if self.observation() != Some(observation) {
            debug!("Ignoring stale notification {observation} for '{}'", entry.target);
            return false;
        }
        if self.is_revealed() || !entry.meets(&self.options) {
            return false;
        }

        debug!(
            "Revealed '{}' at ratio {:.3}",
            entry.target, entry.intersection_ratio
        );
        self.state = Reveal::Revealed(entry.clone());
        true
    }

    fn release<S>(&mut self, source: &mut S)
    where
        S: IntersectionSource + ?Sized,
    {
        if let Some(attachment) = self.attachment.take() {
            debug!("Releasing {} for '{}'", attachment.observation, attachment.target);
            source.unobserve(attachment.observation);
        }
    }
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self::new(RevealOptions::default())
    }
}
