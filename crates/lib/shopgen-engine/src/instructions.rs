use crate::validator::ProjectName;
use std::fmt;

const RULE: &str = "========================================";

/// Which follow-up instructions to show once the tree is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionSet {
    Docker,
    Local,
}

impl InstructionSet {
    pub fn select(show_docker_instructions: bool) -> Self {
        if show_docker_instructions {
            InstructionSet::Docker
        } else {
            InstructionSet::Local
        }
    }
}

/// Printable next steps for a freshly generated project.
///
/// Every command embeds the project name and package manager so it can be
/// copied straight into a terminal.
#[derive(Debug, Clone, Copy)]
pub struct Instructions<'a> {
    pub set: InstructionSet,
    pub project: &'a ProjectName,
    pub package_manager: &'a str,
}

impl<'a> Instructions<'a> {
    pub fn new(set: InstructionSet, project: &'a ProjectName, package_manager: &'a str) -> Self {
        Self {
            set,
            project,
            package_manager,
        }
    }

    fn write_common(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Next Steps:")?;
        writeln!(f, "1. Navigate into the project: cd {}", self.project)?;
        writeln!(f, "2. Set up your environment variables:")?;
        writeln!(f, "   - In `/backend`, copy `.env.example` to `.env`")?;
        writeln!(
            f,
            "   - Edit `.env` and set your `MONGO_URI` and a secure `JWT_SECRET`."
        )
    }

    fn write_docker(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "--- To run with Docker ---")?;
        writeln!(f, "3. Build and start the containers:")?;
        writeln!(f, "   docker compose up --build")
    }

    fn write_local(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pm = self.package_manager;

        writeln!(f)?;
        writeln!(f, "--- To run locally ---")?;
        writeln!(f, "3. Install dependencies (if you skipped it):")?;
        writeln!(f, "   - In one terminal: cd backend && {pm} install")?;
        writeln!(f, "   - In another terminal: cd frontend && {pm} install")?;
        writeln!(f, "4. Start the servers:")?;
        writeln!(f, "   - In the backend terminal: {pm} run dev")?;
        writeln!(f, "   - In the frontend terminal: {pm} run dev")
    }
}

impl fmt::Display for Instructions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_common(f)?;
        match self.set {
            InstructionSet::Docker => self.write_docker(f),
            InstructionSet::Local => self.write_local(f),
        }
    }
}

pub fn completion_banner() -> String {
    format!("{RULE}\nProject scaffolding complete!\n{RULE}")
}

/// Warning shown when dependency installation could not finish.
pub fn manual_install_warning(package_manager: &str) -> String {
    format!(
        "Could not install dependencies. Please run '{package_manager} install' in both /backend and /frontend directories manually."
    )
}
