#![forbid(unsafe_code)]

//! One sticky header's view of the world.
//!
//! A [`TrackedElement`] owns exactly two pieces of state: its own latest
//! rectangle, and the latest collection broadcast by its registry. Placement
//! is never cached; [`TrackedElement::placement`] runs the offset engine on
//! demand against whatever snapshot arrived last.
//!
//! # Lifecycle
//!
//! | Event         | Effect                                             |
//! |---------------|----------------------------------------------------|
//! | `mount`       | allocate id, subscribe, report [`FrameRect::ZERO`] |
//! | `observe`     | replace own rect, report it                        |
//! | drop          | unsubscribe, unregister                            |

use std::cell::RefCell;
use std::rc::Rc;

use sticky_core::{ElementId, FrameCollection, FrameRect};
use sticky_layout::{Placement, StackKey, StackPriority, StickyEngine};

use crate::reactive::Subscription;
use crate::registry::FrameRegistry;

#[derive(Debug, Default)]
struct ElementView {
    frame: FrameRect,
    frames: FrameCollection,
    broadcasts_seen: u64,
}

/// A mounted sticky header.
pub struct TrackedElement {
    id: ElementId,
    registry: FrameRegistry,
    engine: StickyEngine,
    view: Rc<RefCell<ElementView>>,
    _subscription: Subscription,
}

impl std::fmt::Debug for TrackedElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let view = self.view.borrow();
        f.debug_struct("TrackedElement")
            .field("id", &self.id)
            .field("frame", &view.frame)
            .field("collection_len", &view.frames.len())
            .finish_non_exhaustive()
    }
}

impl TrackedElement {
    /// Mount a header on `registry` with the default engine.
    #[must_use]
    pub fn mount(registry: &FrameRegistry) -> Self {
        Self::mount_with(registry, StickyEngine::default())
    }

    /// Mount a header on `registry` with a specific engine.
    #[must_use]
    pub fn mount_with(registry: &FrameRegistry, engine: StickyEngine) -> Self {
        let id = registry.allocate_id();
        let view = Rc::new(RefCell::new(ElementView {
            frames: registry.snapshot(),
            ..ElementView::default()
        }));

        let sink = Rc::clone(&view);
        let subscription = registry.subscribe(move |frames| {
            let mut view = sink.borrow_mut();
            view.frames = frames.clone();
            view.broadcasts_seen += 1;
        });

        let element = Self {
            id,
            registry: registry.clone(),
            engine,
            view,
            _subscription: subscription,
        };
        element.registry.report(id, FrameRect::ZERO);
        element
    }

    /// This header's id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Latest rectangle this header observed for itself.
    #[must_use]
    pub fn frame(&self) -> FrameRect {
        self.view.borrow().frame
    }

    /// Record a new layout rectangle and report it to the registry.
    pub fn observe(&self, rect: FrameRect) {
        self.view.borrow_mut().frame = rect;
        self.registry.report(self.id, rect);
    }

    /// Latest collection received from the registry.
    #[must_use]
    pub fn frames(&self) -> FrameCollection {
        self.view.borrow().frames.clone()
    }

    /// Number of broadcasts this header has received.
    #[must_use]
    pub fn broadcasts_seen(&self) -> u64 {
        self.view.borrow().broadcasts_seen
    }

    /// Offset and sticking state for the current geometry.
    #[must_use]
    pub fn placement(&self) -> Placement {
        let view = self.view.borrow();
        self.engine.place(view.frame, &view.frames)
    }

    /// Paint tier for the current geometry.
    #[must_use]
    pub fn priority(&self) -> StackPriority {
        self.placement().priority()
    }

    /// Full paint order key, or `None` if this header is missing from the
    /// latest snapshot.
    ///
    /// The tier is [`StickyEngine::paint_tier`], which can be pinned for a
    /// resting header sliding over a pinned one.
    #[must_use]
    pub fn stack_key(&self) -> Option<StackKey> {
        let view = self.view.borrow();
        let rank = view.frames.position(self.id)?;
        let tier = self.engine.paint_tier(view.frame, &view.frames);
        Some(StackKey::new(tier, rank))
    }
}

impl Drop for TrackedElement {
    fn drop(&mut self) {
        self.registry.unregister(self.id);
    }
}
