//! Elevated-shell indicator.

use super::{RenderContext, SegmentProvider, colored};
use crate::styling::Segment;

const ADMIN_TEXT: &str = "ADMIN";

pub struct AdminSegment;

impl SegmentProvider for AdminSegment {
    fn resolve(&self, ctx: &RenderContext<'_>) -> Option<Segment> {
        ctx.is_admin
            .then(|| colored(&ctx.config.colors.admin, ADMIN_TEXT).bold())
    }
}
