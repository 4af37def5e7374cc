//! Virtual scroll manager: the public face of the windowing core.
//!
//! The manager owns every piece of mutable state (items, item extent,
//! visible range, registry) and wires the range calculator, recycler and
//! spacer math together. Each recompute trigger (scroll, resize, data
//! replacement) runs one synchronous render pass:
//!
//! 1. Sample geometry from the container.
//! 2. Recompute the visible range from scratch.
//! 3. Reconcile the registry against it.
//! 4. Rebuild the target: leading spacer, elements in index order, trailing
//!    spacer.
//!
//! The target is cleared and rebuilt on every pass. Element identity lives
//! in the registry, so elements that stay in range are updated in place
//! and only re-placed, never re-created.

use std::time::Instant;

use crate::config::VirtualScrollConfig;
use crate::error::VirtualScrollError;
use crate::event::{self, FrameThrottle, Pending, Subscription, SubscriptionId, ViewportEvent};

use super::extent::{ExtentEstimator, Lifecycle};
use super::range::{compute_visible_range, Geometry, VisibleRange};
use super::recycler::{reconcile, RenderStats};
use super::registry::RenderedRegistry;
use super::spacer::Spacers;
use super::target::{RenderTarget, ScrollContainer};

/// Caller function producing a new element for an item.
pub type CreateFn<T, E> = Box<dyn FnMut(&T, usize) -> E>;

/// Caller function refreshing an existing element in place.
///
/// Must be idempotent for a fixed item and index.
pub type UpdateFn<T, E> = Box<dyn FnMut(&mut E, &T, usize)>;

/// Result of [`VirtualScrollManager::update_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The rendered element was updated in place.
    Updated,
    /// A full render pass ran to materialize the item.
    Rerendered,
    /// The item was stored but is outside the visible range; it renders
    /// when scrolled into view.
    Deferred,
    /// The manager has been destroyed.
    Ignored,
}

/// Builder for [`VirtualScrollManager`].
pub struct VirtualScrollBuilder<T, E, R, C> {
    target: Option<R>,
    container: Option<C>,
    create: Option<CreateFn<T, E>>,
    update: Option<UpdateFn<T, E>>,
    items: Vec<T>,
    config: VirtualScrollConfig,
}

impl<T, E, R, C> Default for VirtualScrollBuilder<T, E, R, C> {
    fn default() -> Self {
        Self {
            target: None,
            container: None,
            create: None,
            update: None,
            items: Vec::new(),
            config: VirtualScrollConfig::default(),
        }
    }
}

impl<T, E, R, C> std::fmt::Debug for VirtualScrollBuilder<T, E, R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VirtualScrollBuilder")
            .field("has_target", &self.target.is_some())
            .field("has_container", &self.container.is_some())
            .field("has_create", &self.create.is_some())
            .field("has_update", &self.update.is_some())
            .field("items", &self.items.len())
            .field("config", &self.config)
            .finish()
    }
}

impl<T, E, R, C> VirtualScrollBuilder<T, E, R, C>
where
    R: RenderTarget<E>,
    C: ScrollContainer,
{
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rendering target. Required.
    #[must_use]
    pub fn target(mut self, target: R) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the scrollable container to observe. Required.
    #[must_use]
    pub fn container(mut self, container: C) -> Self {
        self.container = Some(container);
        self
    }

    /// Set the function that creates an element for an item. Required.
    #[must_use]
    pub fn create(mut self, create: impl FnMut(&T, usize) -> E + 'static) -> Self {
        self.create = Some(Box::new(create));
        self
    }

    /// Set the function that refreshes an existing element.
    ///
    /// The function must be idempotent: calling it twice with the same item
    /// and index must leave the same observable content. Without it, kept
    /// elements are re-created on every pass.
    #[must_use]
    pub fn update(mut self, update: impl FnMut(&mut E, &T, usize) + 'static) -> Self {
        self.update = Some(Box::new(update));
        self
    }

    /// Set the initial item collection.
    #[must_use]
    pub fn items(mut self, items: Vec<T>) -> Self {
        self.items = items;
        self
    }

    /// Set the configuration.
    #[must_use]
    pub fn config(mut self, config: VirtualScrollConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the manager, measure, subscribe, and run the first pass.
    ///
    /// Fails without side effects when a required input is missing or the
    /// configuration is invalid.
    pub fn build(self) -> Result<VirtualScrollManager<T, E, R, C>, VirtualScrollError> {
        let target = self.target.ok_or(VirtualScrollError::MissingTarget)?;
        let mut container = self.container.ok_or(VirtualScrollError::MissingContainer)?;
        let create = self.create.ok_or(VirtualScrollError::MissingCreate)?;
        self.config.validate()?;

        let mut estimator = ExtentEstimator::new(self.config.item_extent);
        estimator.measure(target.first_extent());

        let (sink, subscription) = event::channel(self.config.event_capacity);
        let subscription_id = container.subscribe(sink);

        let mut manager = VirtualScrollManager {
            throttle: FrameThrottle::new(self.config.frame_duration()),
            config: self.config,
            target,
            container,
            create,
            update: self.update,
            items: self.items,
            estimator,
            geometry: Geometry::default(),
            range: VisibleRange::Empty,
            spacers: Spacers::default(),
            registry: RenderedRegistry::new(),
            subscription: Some((subscription_id, subscription)),
            last_stats: RenderStats::default(),
        };
        vdebug!(
            items = manager.items.len(),
            item_extent = manager.estimator.extent(),
            overscan = manager.config.overscan,
            "virtual scroll manager ready"
        );
        manager.render();
        Ok(manager)
    }
}

/// Renders a window of a large item collection into a target.
///
/// `T` is the item type, `E` the element type produced by the caller's
/// create function, `R` the rendering target and `C` the scrollable
/// container.
pub struct VirtualScrollManager<T, E, R, C>
where
    R: RenderTarget<E>,
    C: ScrollContainer,
{
    config: VirtualScrollConfig,
    target: R,
    container: C,
    create: CreateFn<T, E>,
    update: Option<UpdateFn<T, E>>,
    items: Vec<T>,
    estimator: ExtentEstimator,
    geometry: Geometry,
    range: VisibleRange,
    spacers: Spacers,
    registry: RenderedRegistry<E>,
    subscription: Option<(SubscriptionId, Subscription)>,
    throttle: FrameThrottle,
    last_stats: RenderStats,
}

impl<T, E, R, C> VirtualScrollManager<T, E, R, C>
where
    R: RenderTarget<E>,
    C: ScrollContainer,
{
    /// Start building a manager.
    pub fn builder() -> VirtualScrollBuilder<T, E, R, C> {
        VirtualScrollBuilder::new()
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Total scrollable extent: `item_count * item_extent`.
    pub fn total_extent(&self) -> f64 {
        self.items.len() as f64 * self.estimator.extent()
    }

    /// Per-item extent used for all position math.
    pub const fn item_extent(&self) -> f64 {
        self.estimator.extent()
    }

    /// Number of items in the collection.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The item collection.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Range materialized by the last pass.
    pub const fn visible_range(&self) -> VisibleRange {
        self.range
    }

    /// Spacer sizes from the last pass.
    pub const fn spacers(&self) -> Spacers {
        self.spacers
    }

    /// Geometry sampled by the last pass.
    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Statistics of the last pass.
    pub const fn last_stats(&self) -> RenderStats {
        self.last_stats
    }

    /// Number of materialized elements.
    pub fn rendered_len(&self) -> usize {
        self.registry.len()
    }

    /// Materialized indices in ascending order.
    pub fn rendered_indices(&self) -> Vec<usize> {
        self.registry.indices()
    }

    /// Check if an index has a materialized element.
    pub fn is_rendered(&self, index: usize) -> bool {
        self.registry.contains(index)
    }

    /// Element materialized for an index.
    pub fn element(&self, index: usize) -> Option<&E> {
        self.registry.get(index)
    }

    /// Lifecycle phase.
    pub const fn lifecycle(&self) -> Lifecycle {
        self.estimator.phase()
    }

    /// Check if [`destroy`](Self::destroy) has run.
    pub fn is_destroyed(&self) -> bool {
        self.estimator.phase() == Lifecycle::Destroyed
    }

    /// Active configuration.
    pub const fn config(&self) -> &VirtualScrollConfig {
        &self.config
    }

    /// The rendering target.
    pub const fn target(&self) -> &R {
        &self.target
    }

    /// The observed container.
    pub const fn container(&self) -> &C {
        &self.container
    }

    /// Mutable access to the observed container, for hosts that drive it.
    ///
    /// Changes made here reach the manager through its subscription.
    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Replace the item collection and re-render.
    ///
    /// Registry entries at indices past the new length are dropped before the
    /// range is recomputed against the new count.
    pub fn set_data(&mut self, items: Vec<T>) -> RenderStats {
        if self.is_destroyed() {
            return RenderStats::default();
        }
        let truncated = self.registry.truncate(items.len());
        vdebug!(
            old_len = self.items.len(),
            new_len = items.len(),
            truncated,
            "replacing item collection"
        );
        self.items = items;
        self.throttle.request(Pending::DATA);
        let mut stats = self.flush().unwrap_or_default();
        stats.dropped += truncated;
        self.last_stats = stats;
        stats
    }

    /// Replace one item and refresh whatever displays it.
    ///
    /// Indices past the end of the collection are rejected without changes.
    /// See [`UpdateOutcome`] for what happens to valid indices.
    pub fn update_at(&mut self, index: usize, item: T) -> Result<UpdateOutcome, VirtualScrollError> {
        if self.is_destroyed() {
            return Ok(UpdateOutcome::Ignored);
        }
        let len = self.items.len();
        let Some(slot) = self.items.get_mut(index) else {
            vwarn!(index, len, "update_at past end of collection");
            return Err(VirtualScrollError::IndexOutOfBounds { index, len });
        };
        *slot = item;

        let updated = match (self.registry.get_mut(index), self.update.as_mut()) {
            (Some(element), Some(update)) => {
                update(element, &self.items[index], index);
                true
            }
            _ => false,
        };
        if updated {
            self.place();
            vtrace!(index, "updated rendered element in place");
            return Ok(UpdateOutcome::Updated);
        }
        if self.range.contains(index) {
            self.render();
            return Ok(UpdateOutcome::Rerendered);
        }
        Ok(UpdateOutcome::Deferred)
    }

    /// Scroll the container so `index` starts at the top of the viewport.
    ///
    /// Indices past the end are clamped to the last item; an empty
    /// collection scrolls to `0`. The window itself is recomputed by the next
    /// scroll cycle ([`pump`](Self::pump) or [`flush`](Self::flush)).
    /// Returns the offset handed to the container.
    pub fn scroll_to_index(&mut self, index: usize) -> f64 {
        if self.is_destroyed() {
            return self.container.scroll_offset();
        }
        let clamped = index.min(self.items.len().saturating_sub(1));
        let offset = clamped as f64 * self.estimator.extent();
        vtrace!(index, clamped, offset, "scroll to index");
        self.container.set_scroll_offset(offset);
        offset
    }

    /// Process queued container events, recomputing at most once per frame.
    ///
    /// Returns the stats of the pass if one ran.
    pub fn pump(&mut self, now: Instant) -> Option<RenderStats> {
        if self.is_destroyed() {
            return None;
        }
        self.collect_events();
        let reasons = self.throttle.poll(now)?;
        Some(self.recompute(reasons))
    }

    /// Process queued container events and recompute now if any arrived.
    pub fn flush(&mut self) -> Option<RenderStats> {
        if self.is_destroyed() {
            return None;
        }
        self.collect_events();
        let reasons = self.throttle.take(Instant::now())?;
        Some(self.recompute(reasons))
    }

    /// When the next throttled recompute may run, if one is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.throttle.next_deadline()
    }

    /// Recompute after a scroll, bypassing the frame throttle.
    pub fn handle_scroll(&mut self) -> RenderStats {
        self.render()
    }

    /// Recompute after a resize, bypassing the frame throttle.
    pub fn handle_resize(&mut self) -> RenderStats {
        self.render()
    }

    /// Run a full render pass against the current container geometry.
    pub fn render(&mut self) -> RenderStats {
        if self.is_destroyed() {
            return RenderStats::default();
        }
        // Geometry is sampled below, so queued events are already covered.
        self.discard_events();

        self.geometry = Geometry::new(self.container.scroll_offset(), self.container.viewport_extent());
        let extent = self.estimator.extent();
        self.range = compute_visible_range(self.geometry, extent, self.items.len(), self.config.overscan);

        let stats = reconcile(
            &mut self.registry,
            self.range,
            &self.items,
            &mut *self.create,
            self.update.as_deref_mut(),
        );
        self.spacers = Spacers::compute(self.range, self.items.len(), extent);
        self.place();
        self.container.set_content_extent(self.total_extent());
        self.estimator.mark_ready();

        vtrace!(
            range = ?self.range,
            created = stats.created,
            reused = stats.reused,
            dropped = stats.dropped,
            "render pass"
        );
        self.last_stats = stats;
        stats
    }

    /// Unsubscribe from the container and release all owned state.
    ///
    /// Safe to call more than once.
    pub fn destroy(&mut self) {
        if self.is_destroyed() {
            return;
        }
        if let Some((id, _subscription)) = self.subscription.take() {
            self.container.unsubscribe(id);
        }
        self.registry.clear();
        self.items = Vec::new();
        self.target.clear();
        self.throttle.reset();
        self.range = VisibleRange::Empty;
        self.spacers = Spacers::default();
        self.estimator.mark_destroyed();
        vdebug!("virtual scroll manager destroyed");
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn recompute(&mut self, reasons: Pending) -> RenderStats {
        vtrace!(reasons = ?reasons, "throttled recompute");
        self.render()
    }

    fn collect_events(&mut self) {
        let Some((_, subscription)) = &self.subscription else {
            return;
        };
        while let Some(event) = subscription.try_next() {
            match event {
                ViewportEvent::Scroll { .. } => self.throttle.request(Pending::SCROLL),
                ViewportEvent::Resize { .. } => self.throttle.request(Pending::RESIZE),
            }
        }
    }

    fn discard_events(&mut self) {
        if let Some((_, subscription)) = &self.subscription {
            while subscription.try_next().is_some() {}
        }
        self.throttle.discard();
    }

    /// Rebuild the target from the registry and spacers.
    fn place(&mut self) {
        self.target.clear();
        if let Some(spacer) = self.spacers.leading_spacer() {
            self.target.push_spacer(spacer);
        }
        for index in self.range.iter() {
            if let Some(element) = self.registry.get(index) {
                self.target.push_element(index, element);
            }
        }
        if let Some(spacer) = self.spacers.trailing_spacer() {
            self.target.push_spacer(spacer);
        }
    }
}

impl<T, E, R, C> Drop for VirtualScrollManager<T, E, R, C>
where
    R: RenderTarget<E>,
    C: ScrollContainer,
{
    fn drop(&mut self) {
        if let Some((id, _subscription)) = self.subscription.take() {
            self.container.unsubscribe(id);
        }
    }
}

impl<T, E, R, C> std::fmt::Debug for VirtualScrollManager<T, E, R, C>
where
    R: RenderTarget<E>,
    C: ScrollContainer,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VirtualScrollManager")
            .field("items", &self.items.len())
            .field("item_extent", &self.estimator.extent())
            .field("phase", &self.estimator.phase())
            .field("range", &self.range)
            .field("rendered", &self.registry.len())
            .field("geometry", &self.geometry)
            .finish_non_exhaustive()
    }
}
