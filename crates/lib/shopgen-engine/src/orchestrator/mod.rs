use crate::catalog::TemplateCatalog;
use crate::error::ScaffoldResult;
use crate::install::{DependencyInstaller, InstallFailure, InstallOutcome};
use crate::instructions::{InstructionSet, Instructions, completion_banner, manual_install_warning};
use crate::resolver::PathResolver;
use crate::validator::ProjectName;
use crate::writer::FileWriter;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};


/// What the operator asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    pub project_name: String,
    pub install_deps: bool,
    pub show_docker_instructions: bool,
}

/// Where a scaffolding run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Writing { remaining: usize },
    InstallingBackend,
    InstallingFrontend,
    PrintingInstructions,
    Done,
}

impl Phase {
    /// Install steps may jump straight to `PrintingInstructions` when they
    /// fail; nothing ever moves backwards.
    pub fn can_transition_to(&self, next: &Phase) -> bool {
        use Phase::*;

        match (self, next) {
            (Idle, Writing { .. }) => true,
            (Writing { remaining }, Writing { remaining: next }) => {
                *remaining > 0 && *next + 1 == *remaining
            }
            (Writing { remaining: 0 }, InstallingBackend | PrintingInstructions) => true,
            (InstallingBackend, InstallingFrontend | PrintingInstructions) => true,
            (InstallingFrontend, PrintingInstructions) => true,
            (PrintingInstructions, Done) => true,
            _ => false,
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub project_root: PathBuf,
    /// Absolute paths of every file written, in catalog order.
    pub written: Vec<PathBuf>,
    /// `None` when the step was not attempted.
    pub backend_install: Option<InstallOutcome>,
    pub frontend_install: Option<InstallOutcome>,
    pub instructions: InstructionSet,
}

impl GenerationResult {
    /// True when installation was requested but did not finish.
    pub fn is_degraded(&self) -> bool {
        [&self.backend_install, &self.frontend_install]
            .into_iter()
            .flatten()
            .any(|outcome| !outcome.is_success())
    }
}

/// Operator-facing output of a run.
///
/// The first failed write is logged and the sink is then muted, so a
/// closed or full stdout cannot interrupt generation.
struct Progress<'o> {
    out: &'o mut dyn Write,
    muted: bool,
}

impl<'o> Progress<'o> {
    fn new(out: &'o mut dyn Write) -> Self {
        Self { out, muted: false }
    }

    fn write(&mut self, args: fmt::Arguments<'_>) {
        if self.muted {
            return;
        }

        if let Err(output_error) = self.out.write_fmt(args).and_then(|()| self.out.flush()) {
            warn!(%output_error, "Operator output unavailable, continuing without it");
            self.muted = true;
        }
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        self.write(format_args!("{args}\n"));
    }
}

/// Drives a run from validation to printed instructions.
pub struct Scaffolder<'c, I: DependencyInstaller> {
    catalog: &'c TemplateCatalog,
    installer: I,
    output_dir: PathBuf,
    phase: Phase,
}

impl<'c, I: DependencyInstaller> Scaffolder<'c, I> {
    pub fn new(
        catalog: &'c TemplateCatalog,
        installer: I,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            catalog,
            installer,
            output_dir: output_dir.into(),
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Validates the name, writes the tree, optionally installs
    /// dependencies and prints next steps to `out`.
    ///
    /// The first write failure aborts the run. Files written before it are
    /// left on disk, there is no rollback. Failures writing to `out` are
    /// logged and never abort the run.
    #[tracing::instrument(skip_all, fields(project = %request.project_name))]
    pub fn run(
        &mut self,
        request: &ProjectRequest,
        out: &mut dyn Write,
    ) -> ScaffoldResult<GenerationResult> {
        self.phase = Phase::Idle;

        let project = ProjectName::parse(&request.project_name)?;
        let writer = FileWriter::new(&self.output_dir)?;
        let project_root = writer.output_dir().join(project.as_str());
        let mut progress = Progress::new(out);

        info!("Scaffolding has begun");
        progress.line(format_args!("Scaffolding project: {project}"));

        let written = self.write_tree(&project, &writer, &mut progress)?;

        let (backend_install, frontend_install) = if request.install_deps {
            self.install_dependencies(&project_root, &mut progress)
        } else {
            (None, None)
        };

        let instructions = InstructionSet::select(request.show_docker_instructions);
        self.transition(Phase::PrintingInstructions);
        progress.line(format_args!("\n{}\n", completion_banner()));
        progress.write(format_args!(
            "{}",
            Instructions::new(instructions, &project, self.installer.program())
        ));

        self.transition(Phase::Done);
        info!(files = written.len(), "Scaffolding finished");

        Ok(GenerationResult {
            project_root,
            written,
            backend_install,
            frontend_install,
            instructions,
        })
    }

    fn write_tree(
        &mut self,
        project: &ProjectName,
        writer: &FileWriter,
        progress: &mut Progress<'_>,
    ) -> ScaffoldResult<Vec<PathBuf>> {
        let entries = PathResolver::resolve(project, self.catalog);
        let mut remaining = entries.len();
        self.transition(Phase::Writing { remaining });

        let mut written = Vec::with_capacity(entries.len());
        for entry in &entries {
            let path = writer.write(entry)?;
            progress.line(format_args!("Created: {}", entry.path.display()));
            written.push(path);

            remaining -= 1;
            self.transition(Phase::Writing { remaining });
        }

        Ok(written)
    }

    fn install_dependencies(
        &mut self,
        project_root: &Path,
        progress: &mut Progress<'_>,
    ) -> (Option<InstallOutcome>, Option<InstallOutcome>) {
        progress.line(format_args!("\nAttempting to install dependencies..."));

        self.transition(Phase::InstallingBackend);
        progress.line(format_args!("\n--- Installing backend dependencies ---"));
        let backend = self.installer.install(&project_root.join("backend"));

        if let InstallOutcome::Failed(failure) = &backend {
            warn!(%failure, "Backend installation failed, skipping frontend");
            self.report_degradation(failure, progress);
            return (Some(backend), None);
        }

        self.transition(Phase::InstallingFrontend);
        progress.line(format_args!("\n--- Installing frontend dependencies ---"));
        let frontend = self.installer.install(&project_root.join("frontend"));

        match &frontend {
            InstallOutcome::Succeeded => {
                progress.line(format_args!("\nDependencies installed successfully."));
            }
            InstallOutcome::Failed(failure) => {
                warn!(%failure, "Frontend installation failed");
                self.report_degradation(failure, progress);
            }
        }

        (Some(backend), Some(frontend))
    }

    fn report_degradation(&self, failure: &InstallFailure, progress: &mut Progress<'_>) {
        progress.line(format_args!("\nWarning: {failure}"));
        progress.line(format_args!(
            "{}",
            manual_install_warning(self.installer.program())
        ));
    }

    fn transition(&mut self, next: Phase) {
        debug_assert!(
            self.phase.can_transition_to(&next),
            "illegal transition from {:?} to {:?}",
            self.phase,
            next
        );
        debug!(from = ?self.phase, to = ?next, "Phase transition");
        self.phase = next;
    }
}
