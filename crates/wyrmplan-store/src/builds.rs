//! Build collection store
//!
//! Owns the saved build list and the transient edit-dialog state. Builds
//! leave and enter the planner as a JSON array: export serializes the whole
//! list for a browser file save, import parses a user-selected file, asks
//! the user to confirm, and prepends the imported entries ahead of the
//! existing ones.

use crate::error::{Error, Result};
use std::io::Write;
use tracing::debug;
use wyrmplan_core::{BuildData, FormTracker, MonsterSkill};

/// File name offered for the exported build list
pub const EXPORT_FILE_NAME: &str = "build-data-list.json";

/// What the upload widget should do with the raw file after import handling
///
/// Always `Suppress`: the planner consumes the file content itself and the
/// widget must not upload it anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadDisposition {
    /// Do not auto-upload the raw file
    Suppress,
}

/// Outcome of an import attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The user confirmed; this many builds were prepended
    Applied(usize),
    /// The user cancelled; the list is unchanged
    Cancelled,
}

/// Confirmation gate the UI shell implements
///
/// Import mutates nothing until this answers `true`.
pub trait ConfirmGate {
    /// Ask the user whether the parsed builds should be imported
    fn confirm_import(&self, builds: &[BuildData]) -> bool;
}

/// Editor mode of the build dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogMode {
    #[default]
    Add,
    Edit,
    Preview,
}

/// Transient state of the build editor dialog
#[derive(Debug, Clone, Default)]
pub struct BuildDialog {
    /// Whether the dialog is open
    pub visible: bool,
    /// Editor mode
    pub mode: DialogMode,
    /// Build being edited or previewed
    pub data: Option<BuildData>,
}

/// Store owning the saved builds and dialog state
#[derive(Debug)]
pub struct BuildCollection {
    build_data_list: Vec<BuildData>,
    /// Fuzzy-search keyword over the build list
    pub search_keyword: String,
    /// Skill-picker dialog form
    pub skill_dialog: MonsterSkill,
    skill_tracker: FormTracker<MonsterSkill>,
    /// Build editor dialog state
    pub build_dialog: BuildDialog,
    build_tracker: FormTracker<Option<BuildData>>,
}

impl Default for BuildCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        let skill_dialog = MonsterSkill::new("", 0);
        let skill_tracker = FormTracker::new(&skill_dialog);
        Self {
            build_data_list: Vec::new(),
            search_keyword: String::new(),
            skill_dialog,
            skill_tracker,
            build_dialog: BuildDialog::default(),
            build_tracker: FormTracker::new(&None),
        }
    }

    /// The saved builds, newest imports first
    pub fn build_data_list(&self) -> &[BuildData] {
        &self.build_data_list
    }

    /// Restore the persisted build list
    pub fn restore(&mut self, builds: Vec<BuildData>) {
        self.build_data_list = builds;
    }

    /// Append a new build
    pub fn add_build(&mut self, build: BuildData) {
        self.build_data_list.push(build);
    }

    /// Replace the build with the same key; false when no such build exists
    pub fn update_build(&mut self, build: BuildData) -> bool {
        match self
            .build_data_list
            .iter_mut()
            .find(|existing| existing.key == build.key)
        {
            Some(existing) => {
                *existing = build;
                true
            }
            None => false,
        }
    }

    /// Remove a build by key; false when no such build exists
    pub fn remove_build(&mut self, key: &str) -> bool {
        let before = self.build_data_list.len();
        self.build_data_list.retain(|build| build.key != key);
        self.build_data_list.len() != before
    }

    /// Serialize the build list as JSON interchange text
    pub fn export_json(&self) -> Result<String> {
        serde_json::to_string(&self.build_data_list)
            .map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Write the JSON interchange text to a writer
    ///
    /// The caller offers it as a file save named [`EXPORT_FILE_NAME`].
    pub fn write_export<W: Write>(&self, writer: &mut W) -> Result<()> {
        let content = self.export_json()?;
        writer.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Import builds from interchange text, gated by user confirmation
    ///
    /// Text that does not parse as a build list is rejected and the list
    /// stays untouched. On confirmation the imported entries go *ahead of* a
    /// copy of the existing list; on cancellation nothing changes.
    pub fn import_builds(&mut self, text: &str, gate: &dyn ConfirmGate) -> Result<ImportOutcome> {
        let imported: Vec<BuildData> =
            serde_json::from_str(text).map_err(|e| Error::ImportParse(e.to_string()))?;
        if !gate.confirm_import(&imported) {
            debug!("import cancelled by user");
            return Ok(ImportOutcome::Cancelled);
        }

        let count = imported.len();
        let existing = self.build_data_list.clone();
        let mut merged = imported;
        merged.extend(existing);
        self.build_data_list = merged;
        debug!(imported = count, total = self.build_data_list.len(), "builds imported");
        Ok(ImportOutcome::Applied(count))
    }

    /// Whether the skill dialog has unsaved edits
    pub fn skill_dialog_changed(&self) -> bool {
        self.skill_tracker.is_changed(&self.skill_dialog)
    }

    /// Discard skill-dialog edits
    pub fn reset_skill_dialog(&mut self) {
        self.skill_tracker.reset(&mut self.skill_dialog);
    }

    /// Commit the current skill-dialog value as the new baseline
    pub fn commit_skill_dialog(&mut self) {
        let current = self.skill_dialog.clone();
        self.skill_tracker.update(&current);
    }

    /// Open the build editor dialog and arm its change tracker
    pub fn open_build_dialog(&mut self, mode: DialogMode, data: Option<BuildData>) {
        self.build_dialog = BuildDialog {
            visible: true,
            mode,
            data,
        };
        self.build_tracker = FormTracker::new(&self.build_dialog.data);
    }

    /// Close the build editor dialog
    pub fn close_build_dialog(&mut self) {
        self.build_dialog.visible = false;
    }

    /// Whether the build dialog has unsaved edits
    pub fn build_dialog_changed(&self) -> bool {
        self.build_tracker.is_changed(&self.build_dialog.data)
    }

    /// Discard build-dialog edits
    pub fn reset_build_dialog(&mut self) {
        self.build_tracker.reset(&mut self.build_dialog.data);
    }
}
