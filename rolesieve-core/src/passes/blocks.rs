//! blocks.rs - Line-oriented pass for block regions and exclude blocks.
//!
//! Exclude markers are checked before region markers on every line. Block
//! regions may nest: open regions form a stack and a body reaches the output
//! only if every region around it is included. Buffered lines have already
//! been through [`process_line`], so inline regions inside a block are
//! resolved for the same role.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};

use crate::engine::FilterContext;
use crate::markup::compiler::CompiledMarkup;
use crate::passes::inline::process_line;
use crate::passes::PassSet;
use crate::roles::{include, RoleSet};
use crate::summary::FilterSummary;

/// An open block region and the lines collected for it so far.
#[derive(Debug)]
struct OpenRegion {
    roles: RoleSet,
    lines: Vec<String>,
}

fn close_region(
    region: OpenRegion,
    stack: &mut [OpenRegion],
    output: &mut Vec<String>,
    ctx: &FilterContext,
    summary: &mut FilterSummary,
) {
    if !include(&region.roles, &ctx.role) {
        summary.blocks_dropped += 1;
        debug!(
            target: "rolesieve_core::passes",
            "Block region {} dropped for role '{}' ({} lines).",
            region.roles,
            ctx.role,
            region.lines.len()
        );
        return;
    }

    summary.blocks_kept += 1;
    match stack.last_mut() {
        Some(parent) => parent.lines.extend(region.lines),
        None => output.extend(region.lines),
    }
}

/// Splits `content` on `\n`, filters it line by line and joins it back.
pub fn process_lines(
    markup: &CompiledMarkup,
    content: &str,
    ctx: &FilterContext,
    passes: PassSet,
    summary: &mut FilterSummary,
) -> String {
    let mut output: Vec<String> = Vec::new();
    let mut stack: Vec<OpenRegion> = Vec::new();
    let mut in_exclude = false;

    for (index, line) in content.split('\n').enumerate() {
        if passes.exclude {
            if let Some(start) = markup.exclude_start.find(line) {
                if !in_exclude {
                    summary.exclude_blocks += 1;
                }
                // An exclude block opened and closed on one line only removes that line.
                let closes_here = markup.exclude_end.is_match(&line[start.end()..]);
                in_exclude = in_exclude || !closes_here;
                continue;
            }
            if markup.exclude_end.is_match(line) {
                if !in_exclude {
                    debug!(
                        target: "rolesieve_core::passes",
                        "Dropping stray exclude end marker on line {}.",
                        index + 1
                    );
                }
                in_exclude = false;
                continue;
            }
            if in_exclude {
                continue;
            }
        }

        if let Some(caps) = markup.block_start.captures(line) {
            let roles = RoleSet::parse(caps.get(1).map_or("", |m| m.as_str()));
            stack.push(OpenRegion { roles, lines: Vec::new() });
            continue;
        }

        if markup.block_end.is_match(line) {
            match stack.pop() {
                Some(region) => close_region(region, &mut stack, &mut output, ctx, summary),
                None => debug!(
                    target: "rolesieve_core::passes",
                    "Dropping stray block end marker on line {}.",
                    index + 1
                ),
            }
            continue;
        }

        if let Some(processed) = process_line(markup, line, ctx, passes, summary) {
            match stack.last_mut() {
                Some(region) => region.lines.push(processed),
                None => output.push(processed),
            }
        }
    }

    if in_exclude {
        warn!("Exclude block still open at end of input; its content was discarded.");
    }
    while let Some(region) = stack.pop() {
        warn!(
            "Block region {} still open at end of input; closing it implicitly.",
            region.roles
        );
        close_region(region, &mut stack, &mut output, ctx, summary);
    }

    output.join("\n")
}
