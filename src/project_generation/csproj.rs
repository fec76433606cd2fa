//! `.csproj` generation for a single Unity assembly

use std::path::{Path, PathBuf};
use quick_xml::escape::escape;

use super::guid::deterministic_guid;
use super::paths::make_relative_path;
use super::{
    Document, LANG_VERSION, PROJECT_FILE_EXTENSION, ProjectRecord, TARGET_FRAMEWORK, write_file,
};
use crate::assembly::AssemblyDescriptor;
use crate::error::ZedResult;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Path of the project file generated for `assembly_name`
pub fn project_file_path(project_directory: &Path, assembly_name: &str) -> PathBuf {
    project_directory.join(format!("{}.{}", assembly_name, PROJECT_FILE_EXTENSION))
}

/// Writes `{project_directory}/{name}.csproj`, always overwriting.
pub fn write_project_file(
    project_directory: &Path,
    assembly: &AssemblyDescriptor,
) -> ZedResult<ProjectRecord> {
    let guid = deterministic_guid(&assembly.name);
    let path = project_file_path(project_directory, &assembly.name);
    let content = render_project_file(project_directory, assembly, &guid);

    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + content.len());
    bytes.extend_from_slice(UTF8_BOM);
    bytes.extend_from_slice(content.as_bytes());
    write_file(&path, &bytes)?;

    log::debug!("Wrote {} ({} source files)", path.display(), assembly.source_files.len());
    Ok(ProjectRecord {
        name: assembly.name.clone(),
        guid,
        path,
    })
}

/// Renders the project document. Every value coming from Unity is XML-escaped.
pub fn render_project_file(
    project_directory: &Path,
    assembly: &AssemblyDescriptor,
    guid: &str,
) -> String {
    let mut doc = Document::default();
    let name = escape(assembly.name.as_str());

    doc.line(0, r#"<?xml version="1.0" encoding="utf-8"?>"#);
    doc.line(
        0,
        r#"<Project ToolsVersion="4.0" DefaultTargets="Build" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">"#,
    );

    doc.line(1, "<PropertyGroup>");
    doc.line(2, &format!("<LangVersion>{}</LangVersion>", LANG_VERSION));
    doc.line(2, r#"<Configuration Condition=" '$(Configuration)' == '' ">Debug</Configuration>"#);
    doc.line(2, r#"<Platform Condition=" '$(Platform)' == '' ">AnyCPU</Platform>"#);
    doc.line(2, "<ProductVersion>10.0.20506</ProductVersion>");
    doc.line(2, "<SchemaVersion>2.0</SchemaVersion>");
    doc.line(2, &format!("<RootNamespace>{}</RootNamespace>", name));
    doc.line(2, &format!("<ProjectGuid>{{{}}}</ProjectGuid>", guid));
    doc.line(2, "<OutputType>Library</OutputType>");
    doc.line(2, &format!("<AssemblyName>{}</AssemblyName>", name));
    doc.line(2, &format!("<TargetFrameworkVersion>{}</TargetFrameworkVersion>", TARGET_FRAMEWORK));
    doc.line(2, r"<BaseIntermediateOutputPath>Temp\obj\</BaseIntermediateOutputPath>");
    doc.line(2, r"<BaseOutputPath>Temp\bin\</BaseOutputPath>");
    doc.line(2, "<Deterministic>true</Deterministic>");
    doc.line(2, "<Nullable>enable</Nullable>");
    let defines = assembly
        .defines
        .iter()
        .map(|d| escape(d.as_str()))
        .collect::<Vec<_>>()
        .join(";");
    doc.line(2, &format!("<DefineConstants>{}</DefineConstants>", defines));
    doc.line(1, "</PropertyGroup>");

    doc.line(1, "<ItemGroup>");
    for source in &assembly.source_files {
        let relative = make_relative_path(project_directory, source);
        doc.line(2, &format!(r#"<Compile Include="{}" />"#, escape(relative.as_str())));
    }
    doc.line(1, "</ItemGroup>");

    doc.line(1, "<ItemGroup>");
    for reference in &assembly.assembly_references {
        let reference_path = project_file_path(project_directory, reference);
        let relative = make_relative_path(project_directory, &reference_path);
        doc.line(2, &format!(r#"<ProjectReference Include="{}">"#, escape(relative.as_str())));
        doc.line(3, &format!("<Project>{{{}}}</Project>", deterministic_guid(reference)));
        doc.line(3, &format!("<Name>{}</Name>", escape(reference.as_str())));
        doc.line(2, "</ProjectReference>");
    }
    for dll in &assembly.compiled_assembly_references {
        let reference_name = dll
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let hint_path = dll.to_string_lossy();
        doc.line(2, &format!(r#"<Reference Include="{}">"#, escape(reference_name.as_str())));
        doc.line(3, &format!("<HintPath>{}</HintPath>", escape(&*hint_path)));
        doc.line(3, "<Private>False</Private>");
        doc.line(2, "</Reference>");
    }
    doc.line(1, "</ItemGroup>");

    doc.line(1, r#"<Import Project="$(MSBuildToolsPath)\Microsoft.CSharp.targets" />"#);
    doc.line(0, "</Project>");
    doc.finish()
}
