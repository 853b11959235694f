use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};
use strum::IntoEnumIterator;

use crate::injury::InjuryCategoryTable;
use crate::player::ReadinessSeries;
use crate::readiness::{QuantileColumn, ReadinessQuantileSeries};

fn format_value(value: f64) -> String {
    if value.is_nan() {
        "-".into()
    } else {
        format!("{value:.2}")
    }
}

pub fn tabulate_injury_categories(table: &InjuryCategoryTable) -> Table {
    let mut tabulated = Table::default()
        .with_cols({
            let mut cols = vec![Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(12))
                    .with(HAlign::Left),
            )];
            for _ in table.severities() {
                cols.push(Col::new(
                    Styles::default().with(MinWidth(8)).with(HAlign::Right),
                ));
            }
            cols
        })
        .with_row({
            let mut header_cells = vec!["Location".into()];
            for severity in table.severities() {
                header_cells.push(severity.clone().into());
            }
            Row::new(
                Styles::default().with(Header(true)).with(Separator(true)),
                header_cells,
            )
        });
    for (location, counts) in table.locations().iter().zip(table.counts()) {
        let mut row_cells = vec![location.clone().into()];
        for count in counts {
            row_cells.push(count.to_string().into());
        }
        tabulated.push_row(Row::new(Styles::default(), row_cells));
    }
    tabulated
}

pub fn tabulate_readiness_quantiles(series: &ReadinessQuantileSeries) -> Table {
    let mut table = Table::default()
        .with_cols({
            let mut cols = vec![Col::new(
                Styles::default().with(MinWidth(10)).with(HAlign::Centred),
            )];
            for _ in QuantileColumn::iter() {
                cols.push(Col::new(
                    Styles::default().with(MinWidth(15)).with(HAlign::Right),
                ));
            }
            cols
        })
        .with_row({
            let mut header_cells = vec!["Date".into()];
            for column in QuantileColumn::iter() {
                header_cells.push(column.to_string().into());
            }
            Row::new(
                Styles::default().with(Header(true)).with(Separator(true)),
                header_cells,
            )
        });
    for (row, date) in series.index().iter().enumerate() {
        let mut row_cells = vec![date.to_string().into()];
        for column in QuantileColumn::iter() {
            row_cells.push(format_value(series.column(column)[row]).into());
        }
        table.push_row(Row::new(Styles::default(), row_cells));
    }
    table
}

pub fn tabulate_readiness(series: &ReadinessSeries) -> Table {
    let mut table = Table::default().with_cols(vec![
        Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Centred)),
        Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
    ]);
    table.push_row(Row::new(
        Styles::default().with(Header(true)).with(Separator(true)),
        vec!["Date".into(), "Readiness".into()],
    ));
    for (date, &value) in series.index().iter().zip(series.values()) {
        table.push_row(Row::new(
            Styles::default(),
            vec![date.to_string().into(), format_value(value).into()],
        ));
    }
    table
}
