//! Mercurial branch segment.

use super::{RenderContext, SegmentProvider, colored, with_symbol};
use crate::hg::HgRepo;
use crate::styling::Segment;

pub struct HgSegment;

impl SegmentProvider for HgSegment {
    fn resolve(&self, ctx: &RenderContext<'_>) -> Option<Segment> {
        let repo = HgRepo::discover(ctx.cwd())?;
        let colors = &ctx.config.colors;
        let symbol = &ctx.config.symbols.branch;

        // A failing `hg` still marks the repository, just without a branch
        let segment = match repo.branch() {
            Some(branch) => colored(&colors.hg_clean, with_symbol(symbol, &branch)),
            None => colored(&colors.hg_unknown, with_symbol(symbol, "branch n/a")),
        };
        Some(segment)
    }
}
