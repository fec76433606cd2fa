//! `.sln` generation covering every generated project

use std::path::{Path, PathBuf};

use super::guid::deterministic_guid;
use super::paths::make_relative_path;
use super::{Document, ProjectRecord, SOLUTION_FILE_EXTENSION, write_file};
use crate::error::ZedResult;

/// Project type marker for C# projects
const CSHARP_PROJECT_TYPE: &str = "FAE04EC0-301F-11D3-BF4B-00C04F79EFBC";
/// Label the solution's own GUID is derived from
const SOLUTION_GUID_LABEL: &str = "Solution";
const FALLBACK_SOLUTION_NAME: &str = "Project";

const CONFIGURATIONS: [&str; 2] = ["Debug|Any CPU", "Release|Any CPU"];

/// `{project_directory}/{basename(project_directory)}.sln`
pub fn solution_file_path(project_directory: &Path) -> PathBuf {
    let name = project_directory
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_SOLUTION_NAME.to_string());
    project_directory.join(format!("{}.{}", name, SOLUTION_FILE_EXTENSION))
}

/// Writes the solution file (UTF-8 without BOM) and returns its path.
pub fn write_solution_file(
    project_directory: &Path,
    projects: &[ProjectRecord],
) -> ZedResult<PathBuf> {
    let path = solution_file_path(project_directory);
    let content = render_solution_file(project_directory, projects);
    write_file(&path, content.as_bytes())?;

    log::debug!("Wrote {} with {} projects", path.display(), projects.len());
    Ok(path)
}

/// Renders the solution. Projects appear in the order given.
pub fn render_solution_file(project_directory: &Path, projects: &[ProjectRecord]) -> String {
    let mut doc = Document::default();

    doc.line(0, "");
    doc.line(0, "Microsoft Visual Studio Solution File, Format Version 12.00");
    doc.line(0, "# Visual Studio Version 16");
    doc.line(0, "VisualStudioVersion = 16.0.28729.10");
    doc.line(0, "MinimumVisualStudioVersion = 10.0.40219.1");

    for project in projects {
        let relative = make_relative_path(project_directory, &project.path);
        doc.line(
            0,
            &format!(
                r#"Project("{{{}}}") = "{}", "{}", "{{{}}}""#,
                CSHARP_PROJECT_TYPE, project.name, relative, project.guid
            ),
        );
        doc.line(0, "EndProject");
    }

    doc.line(0, "Global");
    doc.line(1, "GlobalSection(SolutionConfigurationPlatforms) = preSolution");
    for configuration in CONFIGURATIONS {
        doc.line(2, &format!("{0} = {0}", configuration));
    }
    doc.line(1, "EndGlobalSection");

    doc.line(1, "GlobalSection(ProjectConfigurationPlatforms) = postSolution");
    for project in projects {
        for configuration in CONFIGURATIONS {
            doc.line(2, &format!("{{{}}}.{1}.ActiveCfg = {1}", project.guid, configuration));
            doc.line(2, &format!("{{{}}}.{1}.Build.0 = {1}", project.guid, configuration));
        }
    }
    doc.line(1, "EndGlobalSection");

    doc.line(1, "GlobalSection(SolutionProperties) = preSolution");
    doc.line(2, "HideSolutionNode = FALSE");
    doc.line(1, "EndGlobalSection");

    doc.line(1, "GlobalSection(ExtensibilityGlobals) = postSolution");
    doc.line(2, &format!("SolutionGuid = {{{}}}", deterministic_guid(SOLUTION_GUID_LABEL)));
    doc.line(1, "EndGlobalSection");
    doc.line(0, "EndGlobal");
    doc.finish()
}
