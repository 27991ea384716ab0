use super::{RenderContext, SegmentProvider, colored};
use crate::manifest;
use crate::styling::Segment;

/// Name and version from the nearest `package.json` or `Cargo.toml`.
pub struct PackageSegment;

impl SegmentProvider for PackageSegment {
    fn resolve(&self, ctx: &RenderContext<'_>) -> Option<Segment> {
        let label = manifest::read_nearest(ctx.cwd())?.label()?;
        Some(colored(&ctx.config.colors.package, label))
    }
}
