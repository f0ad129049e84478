// Group presenter - turns the selection and the store into chart and table specs
use crate::application::store::TimeSeriesStore;
use crate::domain::dashboard::{ChartSpec, DashboardView, MetricCell, SeriesSpec, TableSpec, FOOTNOTE};
use crate::domain::group::{IndicatorSpec, ThematicGroup};
use crate::domain::metric::{
    arrow_for, format_delta, format_magnitude, format_value, year_annotation, MetricResult,
};
use crate::domain::range::RangeState;
use crate::domain::record::{Dataset, DatasetKind};
use crate::domain::state::DashboardState;
use std::collections::HashMap;

/// Build the complete view for one state. Pure: the same inputs always give
/// the same view, and nothing from a previous render carries over.
pub fn present(state: &DashboardState, store: &TimeSeriesStore) -> DashboardView {
    let filtered = filter_group(state.group, state.range, store);

    let chart = build_chart(state.group, &filtered);
    let table = build_table(state.group, state.range, &filtered);

    tracing::debug!(
        group = %state.group,
        from = state.range.from_year(),
        to = state.range.to_year(),
        points = chart.x_labels.len(),
        "Presented dashboard"
    );

    DashboardView::new(chart, table, state.status())
}

fn filter_group(
    group: ThematicGroup,
    range: RangeState,
    store: &TimeSeriesStore,
) -> HashMap<DatasetKind, Dataset> {
    group
        .datasets()
        .into_iter()
        .map(|kind| (kind, range.filter(store.dataset(kind))))
        .collect()
}

fn build_chart(group: ThematicGroup, filtered: &HashMap<DatasetKind, Dataset>) -> ChartSpec {
    let x_labels = filtered[&group.primary_dataset()].years();

    let series = group
        .indicators()
        .iter()
        .map(|spec| {
            let dataset = &filtered[&spec.dataset];
            // overlay datasets are aligned on the primary dataset's years
            let values = x_labels
                .iter()
                .map(|&year| dataset.record_for_year(year).and_then(|r| spec.select(r)))
                .collect();
            SeriesSpec {
                label: spec.label.to_string(),
                values,
                color: spec.color.to_string(),
                dashed: spec.dashed,
            }
        })
        .collect();

    ChartSpec {
        x_labels,
        series,
        y_axis_title: group.y_axis_title().to_string(),
    }
}

fn build_table(
    group: ThematicGroup,
    range: RangeState,
    filtered: &HashMap<DatasetKind, Dataset>,
) -> TableSpec {
    let marker = year_annotation(range.to_year());
    let cells = group
        .indicators()
        .iter()
        .map(|spec| metric_cell(spec, &filtered[&spec.dataset], marker))
        .collect();

    TableSpec {
        title: group.table_title(),
        cells,
        footnote: FOOTNOTE.to_string(),
    }
}

/// First and last rows of the filtered range, not of the whole dataset.
fn metric_cell(spec: &IndicatorSpec, filtered: &Dataset, end_year_marker: &str) -> MetricCell {
    let start = filtered.first().and_then(|r| spec.select(r));
    let end = filtered.last().and_then(|r| spec.select(r));
    let metric = MetricResult::compute(spec.label, start, end, spec.good_direction);

    MetricCell {
        start_display: format_value(metric.start_value),
        end_display: format_value(metric.end_value),
        end_year_marker: end_year_marker.to_string(),
        delta_display: format_delta(metric.delta),
        delta_magnitude: format_magnitude(metric.delta),
        arrow: arrow_for(metric.delta).to_string(),
        classification: metric.classification,
        good_direction: spec.good_direction,
        start_value: metric.start_value,
        end_value: metric.end_value,
        delta: metric.delta,
        label: metric.label,
    }
}
