//! Accumulates cells into rows keyed by input size.
//!
//! The emitter is ACCUMULATING while it exists; [`ResultEmitter::finalize`]
//! consumes it and yields the [`ReportDocument`], so nothing can be recorded
//! once the report has been produced.

use crate::error::{BenchError, Result};
use crate::schema::{Cell, ReportDocument, ResultRow};

#[derive(Clone, Debug)]
pub struct ReportMeta {
    pub algorithm: String,
    pub language: String,
    pub iterations: u64,
}

#[derive(Debug)]
pub struct ResultEmitter {
    meta: ReportMeta,
    variants: Vec<String>,
    /// Indexed `[size][variant]`, both in declaration order.
    rows: Vec<(u64, Vec<Option<Cell>>)>,
}

impl ResultEmitter {
    pub fn new<V, I>(meta: ReportMeta, variants: V, sizes: I) -> Self
    where
        V: IntoIterator,
        V::Item: Into<String>,
        I: IntoIterator<Item = u64>,
    {
        let variants: Vec<String> = variants.into_iter().map(Into::into).collect();
        let rows = sizes
            .into_iter()
            .map(|n| (n, vec![None; variants.len()]))
            .collect();
        Self {
            meta,
            variants,
            rows,
        }
    }

    /// Records the cell for `(variant, n)`. Each pair is accepted exactly once.
    pub fn record(&mut self, variant: &str, n: u64, cell: Cell) -> Result<()> {
        let unknown = || BenchError::UnknownResult {
            variant: variant.to_string(),
            n,
        };
        let col = self
            .variants
            .iter()
            .position(|v| v == variant)
            .ok_or_else(unknown)?;
        let (_, cells) = self
            .rows
            .iter_mut()
            .find(|(size, _)| *size == n)
            .ok_or_else(unknown)?;

        let slot = &mut cells[col];
        if slot.is_some() {
            return Err(BenchError::DuplicateResult {
                variant: variant.to_string(),
                n,
            });
        }
        *slot = Some(cell);
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.rows
            .iter()
            .all(|(_, cells)| cells.iter().all(Option::is_some))
    }

    /// Produces the report. Fails if any (variant, n) cell was never recorded.
    pub fn finalize(self) -> Result<ReportDocument> {
        let mut results = Vec::with_capacity(self.rows.len());
        for (n, cells) in self.rows {
            let mut row = Vec::with_capacity(cells.len());
            for (variant, cell) in self.variants.iter().zip(cells) {
                let cell = cell.ok_or_else(|| BenchError::MissingResult {
                    variant: variant.clone(),
                    n,
                })?;
                row.push((variant.clone(), cell));
            }
            results.push(ResultRow { n, cells: row });
        }

        Ok(ReportDocument {
            algorithm: self.meta.algorithm,
            language: self.meta.language,
            iterations: self.meta.iterations,
            results,
        })
    }
}
