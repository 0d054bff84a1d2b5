/*
 * SPDX-License-Identifier: MPL-2.0
 */

//! Folds the raw run stream into grouped subtitles.


use crate::subtitle::{RawSubtitle, Run, Subtitle};

/// Groups raw runs into subtitles in a single forward pass.
///
/// A run joins the open subtitle only when its timing, position, and fades all match
/// ([`Subtitle::same_metadata`]); anything else closes the open subtitle and starts a new one.
/// Arrival order is preserved and non-adjacent runs are never merged, even when their metadata
/// would match.
pub fn collect<I>(raw: I) -> Vec<Subtitle>
where
    I: IntoIterator<Item = RawSubtitle>,
{
    let mut out = Vec::new();
    let mut current: Option<Subtitle> = None;

    for sub in raw {
        match current.as_mut() {
            Some(open) if open.same_metadata(&sub) => {
                let block = open.blocks.last_mut().expect("open subtitle has a block");
                block.runs.push(Run::from(&sub));
            }
            Some(_) => {
                out.extend(current.replace(Subtitle::from_raw(&sub)));
            }
            None => {
                current = Some(Subtitle::from_raw(&sub));
            }
        }
    }

    out.extend(current);
    out
}
