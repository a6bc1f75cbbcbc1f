/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::collections::BTreeMap;
use std::io::Write;
use std::sync::LazyLock;

use regex::{Captures, Regex};

pub const NO_HELP_TEXT: &str = "There is no help information to display.";
const RULE: &str = "----------------------------------------------------------------";

static IMAGE_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\]]*)\]\(([^)\s]+)\)").expect("BUG: image reference pattern is invalid")
});

/// Help text as delivered to a dialog. Markdown may be absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HelpContent {
    pub markdown: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum DialogChoice {
    Ok,
    Cancel,
}

/// Maps the short image names used in help markdown to real image locations.
pub type ImageRefs = BTreeMap<String, String>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HelpDialog {
    text: String,
}

impl HelpDialog {
    pub fn new(title: &str, content: &HelpContent, images: &ImageRefs) -> Self {
        let text = match content.markdown.as_deref() {
            None | Some("") => NO_HELP_TEXT.to_string(),
            Some(markdown) => format!(
                "Help information for {title}:\n{RULE}\n{}",
                resolve_image_refs(markdown, images)
            ),
        };
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Rewrites `![alt](name)` so `name` points at its entry in `images`.
/// Names without an entry are left alone.
pub fn resolve_image_refs(markdown: &str, images: &ImageRefs) -> String {
    IMAGE_REF
        .replace_all(markdown, |caps: &Captures| match images.get(&caps[2]) {
            Some(uri) => format!("![{}]({uri})", &caps[1]),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Somewhere a dialog can be shown.
pub trait Portal {
    fn show(&mut self, content: &str) -> std::io::Result<()>;
    fn hide(&mut self) -> std::io::Result<()>;
}

pub struct TerminalPortal<W: Write> {
    out: W,
}

impl<W: Write> TerminalPortal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Portal for TerminalPortal<W> {
    fn show(&mut self, content: &str) -> std::io::Result<()> {
        writeln!(self.out, "{content}")?;
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "[ Cancel ]  [ OK ]")?;
        self.out.flush()
    }

    fn hide(&mut self) -> std::io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// An open help dialog. Closing it consumes the handler, so the choice is
/// reported exactly once.
pub struct HelpHandler<'a, P: Portal> {
    portal: &'a mut P,
}

impl<'a, P: Portal> HelpHandler<'a, P> {
    pub fn open(portal: &'a mut P, dialog: &HelpDialog) -> std::io::Result<Self> {
        portal.show(dialog.text())?;
        Ok(Self { portal })
    }

    pub fn close(self, choice: DialogChoice) -> std::io::Result<DialogChoice> {
        self.portal.hide()?;
        Ok(choice)
    }
}

/// Reads a choice typed at the prompt. Anything starting with `c` cancels.
pub fn parse_choice(line: &str) -> DialogChoice {
    match line.trim().chars().next() {
        Some('c') | Some('C') => DialogChoice::Cancel,
        _ => DialogChoice::Ok,
    }
}
