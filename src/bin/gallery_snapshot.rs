use chart_gallery::api::{ChartDescriptor, EventDetail};
use chart_gallery::core::Viewport;
use chart_gallery::gallery::{
    ChartCategory, ChartType, PreviewCache, chart_descriptor, chart_types_in,
    displayed_categories, time_sheet_day_chart,
};
use chart_gallery::render::NullRenderer;
use chart_gallery::telemetry::init_default_tracing;
use serde::Serialize;

const PREVIEW_VIEWPORT: Viewport = Viewport {
    width: 300,
    height: 100,
};
const DETAIL_VIEWPORT: Viewport = Viewport {
    width: 720,
    height: 320,
};

#[derive(Debug)]
struct CliArgs {
    filter: ChartCategory,
    only_chart: Option<ChartType>,
    select_at: Option<f64>,
}

#[derive(Debug, Serialize)]
struct GallerySnapshot {
    sections: Vec<SectionSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_sheet_selection: Option<SelectionSnapshot>,
}

#[derive(Debug, Serialize)]
struct SectionSnapshot {
    category: &'static str,
    charts: Vec<ChartSnapshot>,
}

#[derive(Debug, Serialize)]
struct ChartSnapshot {
    id: &'static str,
    title: &'static str,
    preview_rects: usize,
    preview_lines: usize,
    descriptor: ChartDescriptor,
}

#[derive(Debug, Serialize)]
struct SelectionSnapshot {
    pointer_x: f64,
    header: Option<String>,
    category: Option<String>,
    detail: Option<EventDetail>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let previews = PreviewCache::build(PREVIEW_VIEWPORT).map_err(|err| err.to_string())?;

    let mut sections = Vec::new();
    for category in displayed_categories(args.filter) {
        let mut charts = Vec::new();
        for chart in chart_types_in(category) {
            if args.only_chart.is_some_and(|only| only != chart) {
                continue;
            }
            let preview = previews
                .get(chart)
                .ok_or_else(|| format!("missing preview for `{chart}`"))?;
            charts.push(ChartSnapshot {
                id: chart.id(),
                title: chart.title(),
                preview_rects: preview.rects.len(),
                preview_lines: preview.lines.len(),
                descriptor: chart_descriptor(chart).map_err(|err| err.to_string())?,
            });
        }
        sections.push(SectionSnapshot {
            category: category.title(),
            charts,
        });
    }

    let time_sheet_selection = match args.select_at {
        Some(pointer_x) => Some(select_time_sheet_event(pointer_x)?),
        None => None,
    };

    let snapshot = GallerySnapshot {
        sections,
        time_sheet_selection,
    };
    let serialized = serde_json::to_string_pretty(&snapshot)
        .map_err(|err| format!("failed to serialize snapshot: {err}"))?;
    println!("{serialized}");
    Ok(())
}

fn select_time_sheet_event(pointer_x: f64) -> Result<SelectionSnapshot, String> {
    let mut chart = time_sheet_day_chart(NullRenderer::default(), DETAIL_VIEWPORT)
        .map_err(|err| err.to_string())?;
    let selected = chart
        .select_at_viewport_x(pointer_x)
        .map_err(|err| err.to_string())?
        .cloned();
    Ok(SelectionSnapshot {
        pointer_x,
        header: chart.header_title(),
        category: selected.as_ref().map(|event| event.category().to_owned()),
        detail: selected.as_ref().map(EventDetail::for_event),
    })
}

fn parse_category(value: &str) -> Result<ChartCategory, String> {
    ChartCategory::ALL_CASES
        .into_iter()
        .find(|category| category.title() == value)
        .ok_or_else(|| format!("unknown category `{value}`"))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut filter = ChartCategory::All;
    let mut only_chart = None;
    let mut select_at = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--filter" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --filter".to_owned())?;
                filter = parse_category(&value)?;
            }
            "--chart" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --chart".to_owned())?;
                only_chart = Some(value.parse::<ChartType>().map_err(|err| err.to_string())?);
            }
            "--select-at" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --select-at".to_owned())?;
                select_at = Some(
                    value
                        .parse::<f64>()
                        .map_err(|err| format!("invalid --select-at value `{value}`: {err}"))?,
                );
            }
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --bin gallery_snapshot -- [--filter <all|bar>] [--chart <id>] [--select-at <pointer-x>]"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(CliArgs {
        filter,
        only_chart,
        select_at,
    })
}
