use std::io::{BufRead, Write};

use anyhow::{Context, Result, anyhow, bail};
use tokio::runtime::{Builder, Runtime};

use crate::data::{JsonSource, MarketDataError, fetch_current_prices, fetch_historical_series};
use crate::domain::{AssetDescriptor, Catalog, HistoryWindow};
use crate::models::PriceSnapshotRow;
use crate::ui::{ChartRenderer, UI_TEXT, print_snapshot, select_option};
use crate::utils::time_utils;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_STATE_TRANSITIONS;

use super::state::Step;

/// Drives one session from the price snapshot to the chart.
///
/// Owns a current-thread runtime so the async fetchers can be awaited to completion
/// between the blocking prompt reads. Must not be driven from inside another runtime.
pub struct SessionEngine<'a, S: JsonSource, R: ChartRenderer> {
    catalog: &'a Catalog,
    source: S,
    renderer: R,
    runtime: Runtime,
}

impl<'a, S: JsonSource, R: ChartRenderer> SessionEngine<'a, S, R> {
    pub fn new(catalog: &'a Catalog, source: S, renderer: R) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to create Tokio runtime")?;
        Ok(Self {
            catalog,
            source,
            renderer,
            runtime,
        })
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Runs every step in order, reading choices from `input` and writing the session
    /// transcript to `out`. The first error ends the session.
    pub fn run<I: BufRead, W: Write>(&self, input: &mut I, out: &mut W) -> Result<()> {
        let mut step = Step::FetchSnapshot;
        while !step.is_terminal() {
            #[cfg(debug_assertions)]
            if PRINT_STATE_TRANSITIONS {
                log::info!("Session step: {}", step.name());
            }
            step = self.advance(step, input, out)?;
        }
        Ok(())
    }

    fn advance<I: BufRead, W: Write>(&self, step: Step, input: &mut I, out: &mut W) -> Result<Step> {
        let next = match step {
            Step::FetchSnapshot => {
                let rows = self
                    .runtime
                    .block_on(fetch_current_prices(&self.source, self.catalog))
                    .context(UI_TEXT.snapshot_error)?;
                Step::DisplaySnapshot(rows)
            }
            Step::DisplaySnapshot(rows) => {
                print_snapshot(out, &rows, &time_utils::local_now_stamp())?;
                Step::SelectAsset(rows)
            }
            Step::SelectAsset(rows) => {
                if rows.is_empty() {
                    bail!("the price service returned no assets to choose from");
                }
                let labels: Vec<String> = rows.iter().map(PriceSnapshotRow::menu_label).collect();
                let index = select_option(UI_TEXT.asset_prompt, &labels, input, out)?;
                Step::SelectWindow(self.resolve_asset(&rows[index])?)
            }
            Step::SelectWindow(asset) => {
                writeln!(out)?;
                let index = select_option(
                    UI_TEXT.window_prompt,
                    &HistoryWindow::menu_labels(),
                    input,
                    out,
                )?;
                let window = HistoryWindow::from_menu_index(index)
                    .ok_or_else(|| anyhow!("no history window at menu position {}", index))?;
                Step::FetchAndRender(asset, window)
            }
            Step::FetchAndRender(asset, window) => {
                self.fetch_and_render(&asset, window, out)?;
                Step::Done
            }
            Step::Done => Step::Done,
        };
        Ok(next)
    }

    /// Maps a snapshot row back to its catalog entry. Rows arrive in market-cap order,
    /// so the menu position says nothing about the catalog position.
    fn resolve_asset(&self, row: &PriceSnapshotRow) -> Result<AssetDescriptor> {
        self.catalog
            .find_by_symbol(&row.symbol)
            .cloned()
            .ok_or_else(|| {
                anyhow!(
                    "{} is not in the asset catalog",
                    row.menu_label()
                )
            })
    }

    fn fetch_and_render<W: Write>(
        &self,
        asset: &AssetDescriptor,
        window: HistoryWindow,
        out: &mut W,
    ) -> Result<()> {
        let days = window.days();
        writeln!(out, "\n{}", UI_TEXT.progress_line(asset.display_name(), days))?;
        out.flush()?;

        let series = self
            .runtime
            .block_on(fetch_historical_series(&self.source, asset.external_id(), window))
            .with_context(|| format!("{} {}", UI_TEXT.historical_error, asset.external_id()))?;

        let title = UI_TEXT.chart_title(asset.display_name(), days);
        self.renderer.render_candlestick(series, &title, days)
    }
}

/// Process exit status for a finished session.
pub fn exit_status(outcome: &Result<()>) -> u8 {
    match outcome {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

/// True for the failures the fetchers classify themselves.
pub fn is_classified(err: &anyhow::Error) -> bool {
    err.downcast_ref::<MarketDataError>().is_some()
}

/// Text printed at the top-level boundary. Classified failures already carry their
/// own context; anything else is reported generically.
pub fn failure_message(err: &anyhow::Error) -> String {
    if is_classified(err) {
        format!("{:#}", err)
    } else {
        format!("{}: {:#}", UI_TEXT.unexpected_error, err)
    }
}
