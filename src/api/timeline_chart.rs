use tracing::{debug, trace, warn};

use crate::core::{
    LaneLayout, PlotArea, TimeDomain, TimelineEvent, Viewport, total_duration_label,
};
use crate::error::ChartResult;
use crate::interaction::{SelectionChange, SelectionState};
use crate::render::{CategoryColorMap, LayeredRenderFrame, Renderer};

use super::validation::validate_timeline_style;
use super::{
    InvalidationLevel, RenderPass, TimelineChartConfig, TimelineScene, TimelineStyle,
    build_overlay_layer, render_timeline, section_title, timeline_plot_area,
};

/// Time-sheet style chart: one bar per event, one lane per category, and a
/// tap-to-select detail callout.
///
/// Selection changes only rebuild the overlay layer on the next `render`;
/// replacing the event list always clears the selection.
pub struct EventTimelineChart<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    domain: TimeDomain,
    style: TimelineStyle,
    colors: CategoryColorMap,
    overview: bool,
    header_prefix: Option<String>,
    category_order: Option<Vec<String>>,
    events: Vec<TimelineEvent>,
    events_generation: u64,
    lanes: LaneLayout,
    selection: SelectionState,
    pending_invalidation: InvalidationLevel,
    cached_frame: Option<LayeredRenderFrame>,
    last_render_pass: Option<RenderPass>,
}

impl<R: Renderer> EventTimelineChart<R> {
    pub fn new(renderer: R, config: TimelineChartConfig) -> ChartResult<Self> {
        let viewport = config.viewport.validate()?;
        let style = validate_timeline_style(config.style)?;
        config.colors.validate()?;
        timeline_plot_area(viewport, &style, config.overview)?;

        Ok(Self {
            renderer,
            viewport,
            domain: config.domain,
            style,
            colors: config.colors,
            overview: config.overview,
            header_prefix: config.header_prefix,
            category_order: config.category_order,
            events: Vec::new(),
            events_generation: 0,
            lanes: LaneLayout::default(),
            selection: SelectionState::default(),
            pending_invalidation: InvalidationLevel::Full,
            cached_frame: None,
            last_render_pass: None,
        })
    }

    /// Replaces the event list. Input order is the hit-test priority order.
    pub fn set_events(&mut self, events: Vec<TimelineEvent>) {
        let had_selection = self.selection.is_selected();
        self.events = events;
        self.events_generation += 1;
        self.lanes = LaneLayout::from_events(&self.events, self.category_order.as_deref());
        self.selection = SelectionState::NoSelection;
        debug!(
            count = self.events.len(),
            lanes = self.lanes.len(),
            generation = self.events_generation,
            cleared_selection = had_selection,
            "set timeline events"
        );
        self.invalidate(InvalidationLevel::Full);
    }

    #[must_use]
    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    /// Bumped on every `set_events`; hosts use it as the event-list identity.
    #[must_use]
    pub fn events_generation(&self) -> u64 {
        self.events_generation
    }

    #[must_use]
    pub fn lanes(&self) -> &LaneLayout {
        &self.lanes
    }

    #[must_use]
    pub fn domain(&self) -> TimeDomain {
        self.domain
    }

    /// Changes the visible window. The selection survives since the event list is unchanged.
    pub fn set_domain(&mut self, domain: TimeDomain) {
        self.domain = domain;
        self.invalidate(InvalidationLevel::Full);
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        let viewport = viewport.validate()?;
        timeline_plot_area(viewport, &self.style, self.overview)?;
        self.viewport = viewport;
        self.invalidate(InvalidationLevel::Full);
        Ok(())
    }

    #[must_use]
    pub fn style(&self) -> &TimelineStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: TimelineStyle) -> ChartResult<()> {
        let style = validate_timeline_style(style)?;
        timeline_plot_area(self.viewport, &style, self.overview)?;
        self.style = style;
        self.invalidate(InvalidationLevel::Full);
        Ok(())
    }

    #[must_use]
    pub fn colors(&self) -> &CategoryColorMap {
        &self.colors
    }

    pub fn set_colors(&mut self, colors: CategoryColorMap) -> ChartResult<()> {
        colors.validate()?;
        self.colors = colors;
        self.invalidate(InvalidationLevel::Full);
        Ok(())
    }

    /// Sets or removes the explicit lane order and re-assigns lanes.
    pub fn set_category_order(&mut self, order: Option<Vec<String>>) {
        self.category_order = order;
        self.lanes = LaneLayout::from_events(&self.events, self.category_order.as_deref());
        self.invalidate(InvalidationLevel::Full);
    }

    #[must_use]
    pub fn is_overview(&self) -> bool {
        self.overview
    }

    pub fn plot_area(&self) -> ChartResult<PlotArea> {
        timeline_plot_area(self.viewport, &self.style, self.overview)
    }

    /// `Day total: 14h 00m` style header, when a prefix is configured.
    #[must_use]
    pub fn header_title(&self) -> Option<String> {
        self.header_prefix
            .as_ref()
            .map(|prefix| format!("{prefix}: {}", self.total_duration_label()))
    }

    #[must_use]
    pub fn total_duration_label(&self) -> String {
        total_duration_label(&self.events)
    }

    #[must_use]
    pub fn section_title(&self) -> Option<String> {
        section_title(&self.events)
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[must_use]
    pub fn selected_event(&self) -> Option<&TimelineEvent> {
        self.selection.selected()
    }

    /// First event, in input order, whose inclusive interval contains the
    /// timestamp under `pixel_x`.
    ///
    /// `pixel_x` is measured from the plot origin. Non-finite input or a
    /// non-positive width is an error; a finite pixel beyond the
    /// representable time range is a miss.
    pub fn hit_test(
        &self,
        pixel_x: f64,
        plot_width: f64,
    ) -> ChartResult<Option<(usize, &TimelineEvent)>> {
        let Some(time) = self.domain.checked_time_at(pixel_x, 0.0, plot_width)? else {
            trace!(pixel_x, plot_width, "timeline hit-test outside time range");
            return Ok(None);
        };
        let hit = self
            .events
            .iter()
            .enumerate()
            .find(|(_, event)| event.contains(time));
        trace!(
            pixel_x,
            plot_width,
            %time,
            hit = hit.map(|(index, _)| index),
            "timeline hit-test"
        );
        Ok(hit)
    }

    /// Selects the event under `pixel_x`, or clears the selection on a miss.
    ///
    /// Invalid coordinates return an error and leave the selection untouched.
    pub fn select_at(
        &mut self,
        pixel_x: f64,
        plot_width: f64,
    ) -> ChartResult<Option<&TimelineEvent>> {
        let hit = self
            .hit_test(pixel_x, plot_width)?
            .map(|(index, event)| (index, event.clone()));
        let change = self
            .selection
            .apply_hit(hit.as_ref().map(|(index, event)| (*index, event)));
        if change == SelectionChange::Changed {
            self.invalidate(InvalidationLevel::Overlay);
        }
        Ok(self.selection.selected())
    }

    /// Hit-tests a pointer x coordinate given in viewport space.
    pub fn select_at_viewport_x(&mut self, x: f64) -> ChartResult<Option<&TimelineEvent>> {
        let plot = self.plot_area()?;
        self.select_at(x - plot.left, plot.width)
    }

    pub fn clear_selection(&mut self) {
        if self.selection.clear() == SelectionChange::Changed {
            self.invalidate(InvalidationLevel::Overlay);
        }
    }

    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationLevel {
        self.pending_invalidation
    }

    #[must_use]
    pub fn last_render_pass(&self) -> Option<RenderPass> {
        self.last_render_pass
    }

    fn invalidate(&mut self, level: InvalidationLevel) {
        self.pending_invalidation = self.pending_invalidation.max(level);
    }

    /// Builds a complete frame from current state without touching caches.
    pub fn build_render_frame(&self) -> ChartResult<LayeredRenderFrame> {
        let header = self.header_title();
        render_timeline(&self.scene(header.as_deref())?)
    }

    fn scene<'a>(&'a self, header: Option<&'a str>) -> ChartResult<TimelineScene<'a>> {
        Ok(TimelineScene {
            viewport: self.viewport,
            plot: self.plot_area()?,
            domain: self.domain,
            events: &self.events,
            lanes: &self.lanes,
            colors: &self.colors,
            style: &self.style,
            selection: &self.selection,
            header,
            overview: self.overview,
        })
    }

    /// Renders pending changes, reusing cached base layers when only the
    /// selection changed.
    pub fn render(&mut self) -> ChartResult<()> {
        let cached = self.cached_frame.take();
        let level = self.pending_invalidation;
        let header = self.header_title();
        let scene = self.scene(header.as_deref())?;

        let (frame, pass) = match (cached, level) {
            (Some(cached), InvalidationLevel::None) => (cached, RenderPass::Reused),
            (Some(mut cached), InvalidationLevel::Overlay) => {
                cached.replace_layer(build_overlay_layer(&scene)?);
                (cached, RenderPass::OverlayOnly)
            }
            _ => (render_timeline(&scene)?, RenderPass::Full),
        };

        if let Err(err) = self.renderer.render(&frame.flatten()) {
            warn!(error = %err, "timeline render failed; next pass rebuilds every layer");
            self.pending_invalidation = InvalidationLevel::Full;
            return Err(err);
        }

        self.cached_frame = Some(frame);
        self.pending_invalidation = InvalidationLevel::None;
        self.last_render_pass = Some(pass);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
