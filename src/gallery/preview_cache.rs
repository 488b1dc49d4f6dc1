use indexmap::IndexMap;
use tracing::debug;

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::RenderFrame;

use super::{ChartType, overview_frame};

/// Overview frames for every chart type, rendered once at startup.
///
/// Entries are never invalidated; gallery data is static.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewCache {
    viewport: Viewport,
    previews: IndexMap<ChartType, RenderFrame>,
}

impl PreviewCache {
    pub fn build(viewport: Viewport) -> ChartResult<Self> {
        let viewport = viewport.validate()?;
        let mut previews = IndexMap::with_capacity(ChartType::ALL_CASES.len());
        for chart in ChartType::ALL_CASES {
            let frame = overview_frame(chart, viewport)?;
            debug!(
                chart = chart.id(),
                rects = frame.rects.len(),
                lines = frame.lines.len(),
                "cached chart preview"
            );
            previews.insert(chart, frame);
        }
        Ok(Self { viewport, previews })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn get(&self, chart: ChartType) -> Option<&RenderFrame> {
        self.previews.get(&chart)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChartType, &RenderFrame)> {
        self.previews.iter().map(|(chart, frame)| (*chart, frame))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.previews.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.previews.is_empty()
    }
}
