mod assign;
use assign::Directive;

mod coerce;
mod map;
mod record;
mod root;
mod sequence;

use crate::{Field, MapOptions};
use structmap_core::{schema::MetadataIndex, Result};

/// State shared by every step of one mapping call.
#[derive(Debug)]
struct Engine<'a> {
    /// Settings of the call
    options: &'a MapOptions,

    /// Where record metadata is looked up
    index: &'a MetadataIndex,
}

pub(crate) fn run<D: Field, S: Field>(dst: &mut D, src: &S, options: &MapOptions) -> Result<()> {
    let dst_ty = D::ty();
    let src_ty = S::ty();

    // The destination tree starts as the current destination so fields
    // without a source counterpart keep their values.
    let mut dst_value = dst.to_value();
    let src_value = src.to_value();

    let roots = root::classify(&dst_ty, &dst_value, &src_ty, &src_value)?;

    tracing::trace!(
        src = roots.src.name(),
        dst = roots.dst.name(),
        tag = options.tag(),
        "mapping record"
    );

    let engine = Engine {
        options,
        index: MetadataIndex::global(),
    };

    engine
        .assign_record(
            dst_value.unwrap_some_mut(),
            roots.dst,
            src_value.unwrap_some(),
            roots.src,
            options.depth_limit(),
        )
        .map_err(|err| err.with_types(roots.src.name(), roots.dst.name()))?;

    dst.store(dst_value)
}
