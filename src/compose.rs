//! Line composer: assembles the styled fragments into one or two lines.
//!
//! Line 1: model (+effort bar) · context · [session] · [repo] · [cost].
//! Line 2 (only when a branch resolved): branch · editor link.
//! Every fragment degrades independently; a probe returning no data just
//! drops its fragment.

use std::path::Path;

use crate::config::Config;
use crate::git::{self, VcsProbe};
use crate::input::Snapshot;
use crate::theme::{self, palette};
use crate::{context, debuglog, effort, model};

/// Number of session-id characters shown in the debug fragment.
const SESSION_ID_LEN: usize = 8;

pub fn compose(snap: &Snapshot, config: &Config, probe: &dyn VcsProbe) -> String {
    let sep = theme::paint(" \u{B7} ", palette::SEPARATOR); // " · "

    let model_id = snap.model.id.as_deref().unwrap_or("unknown");
    let label = model::resolve_label(model_id, snap.model.display_name.as_deref(), snap.window_size());

    if config.debug_log {
        debuglog::append(snap.session_id.as_deref(), model_id, &label);
    }

    // Model fragment, optionally followed by the effort bar. The bar is
    // gated on the raw id even when the debug toggle shows it verbatim.
    let mut head = if config.show_model_id {
        model::style_label(model_id)
    } else {
        model::style_label(&label)
    };
    let level = effort::resolve_level(snap.workspace.current_dir.as_deref().map(Path::new));
    if let Some(bar) = effort::render_bar(&level, model_id) {
        head.push(' ');
        head.push_str(&bar);
    }

    let mut parts = vec![
        head,
        context::render(
            snap.context_window.used_percentage,
            context::is_extended(snap.window_size()),
        ),
    ];

    if config.show_session_id {
        if let Some(sid) = snap.session_id.as_deref() {
            if !sid.is_empty() {
                let short: String = sid.chars().take(SESSION_ID_LEN).collect();
                parts.push(theme::dim(&short));
            }
        }
    }

    let project_dir = snap.workspace.project_dir.as_deref();
    let remote_url = probe.remote_url();

    if let Some(repo) = project_dir.and_then(git::repo_name) {
        let mut text = theme::paint(repo, palette::REPO);
        if let Some(url) = &remote_url {
            text = theme::hyperlink(&text, url);
        }
        parts.push(text);
    }

    if config.show_cost {
        let total = snap.cost.total_cost_usd.unwrap_or(0.0);
        if total > 0.0 {
            parts.push(theme::paint(&format!("${total:.2}"), palette::COST));
        }
    }

    let mut output = parts.join(&sep);

    if let Some(branch) = probe.branch() {
        let mut branch_text = theme::paint(&branch, palette::BRANCH);
        if let Some(url) = &remote_url {
            if probe.branch_on_remote(&branch) {
                branch_text = theme::hyperlink(&branch_text, &format!("{url}/compare/{branch}"));
            }
        }
        output.push('\n');
        output.push_str(&branch_text);

        if let Some(dir) = project_dir.or(snap.workspace.current_dir.as_deref()) {
            let scheme = &config.editor_scheme;
            let visible = theme::paint(&format!("{scheme} \u{2197}"), palette::SEPARATOR);
            let link = theme::hyperlink(&visible, &format!("{scheme}://file/{dir}"));
            output.push_str(&sep);
            output.push_str(&link);
        }
    }

    output
}
