use super::*;
use crate::assembly::AssemblyDescriptor;
use crate::discovery::{Platform, SearchRoots};
use crate::launcher::SystemLauncher;
use crate::preferences::MemoryPreferenceStore;
use crate::test_utils::{TestProject, sample_assemblies};
use std::cell::{Cell, RefCell};
use std::fs;

/// Records launches instead of starting processes
#[derive(Default)]
struct RecordingLauncher {
    launches: RefCell<Vec<(String, String)>>,
    succeed: bool,
}

impl RecordingLauncher {
    fn succeeding() -> Self {
        Self {
            launches: RefCell::new(Vec::new()),
            succeed: true,
        }
    }
}

impl ProcessLauncher for RecordingLauncher {
    fn launch(&self, executable: &str, arguments: &str) -> bool {
        self.launches
            .borrow_mut()
            .push((executable.to_string(), arguments.to_string()));
        self.succeed
    }
}

/// Counts how often the assembly set is requested
struct CountingSource {
    assemblies: Vec<AssemblyDescriptor>,
    calls: Cell<usize>,
}

impl AssemblySource for CountingSource {
    fn assemblies(&self) -> ZedResult<Vec<AssemblyDescriptor>> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.assemblies.clone())
    }
}

/// Discovery rooted in an empty directory, so only the bare command is found
fn empty_discovery(project: &TestProject) -> ZedDiscovery {
    ZedDiscovery::new(
        Platform::Windows,
        SearchRoots {
            local_app_data: Some(project.root().join("no-local")),
            home: Some(project.root().join("no-home")),
        },
    )
}

fn editor_with(
    project: &TestProject,
    discovery: ZedDiscovery,
) -> ZedCodeEditor<CountingSource, RecordingLauncher, MemoryPreferenceStore> {
    ZedCodeEditor::new(
        UnityProject::new(project.root().to_path_buf()),
        discovery,
        CountingSource {
            assemblies: sample_assemblies(project),
            calls: Cell::new(0),
        },
        RecordingLauncher::succeeding(),
        MemoryPreferenceStore::new(),
    )
}

fn strings(paths: &[&str]) -> Vec<String> {
    paths.iter().map(|p| p.to_string()).collect()
}

#[test]
fn test_installations_are_named_zed() {
    let project = TestProject::new("MyGame");
    let editor = editor_with(&project, empty_discovery(&project));

    let installations = editor.installations();
    assert_eq!(
        installations,
        vec![Installation {
            name: "Zed".to_string(),
            path: PathBuf::from("zed"),
        }]
    );
}

#[test]
fn test_try_get_installation_for_path() {
    let project = TestProject::new("MyGame");
    let editor = editor_with(&project, empty_discovery(&project));

    let installation = editor
        .try_get_installation_for_path("/usr/local/bin/zed")
        .unwrap();
    assert_eq!(installation.name, "Zed");
    assert_eq!(installation.path, PathBuf::from("/usr/local/bin/zed"));

    assert!(editor.try_get_installation_for_path("/usr/bin/code").is_none());
}

#[test]
fn test_open_file_passes_project_and_location() {
    let project = TestProject::new("MyGame");
    let mut editor = editor_with(&project, empty_discovery(&project));
    editor.initialize("/opt/zed/bin/zed");

    let file = project.root().join("Assets").join("Player.cs");
    assert!(editor.open_project(file.to_str().unwrap(), 12, 4));

    let launches = editor.launcher.launches.borrow();
    assert_eq!(launches.len(), 1);
    assert_eq!(launches[0].0, "/opt/zed/bin/zed");
    let root = project.root().to_str().unwrap().replace('\\', "/");
    let file_arg = file.to_str().unwrap().replace('\\', "/");
    assert_eq!(launches[0].1, format!("{} {}:12:4", root, file_arg));
}

#[test]
fn test_open_without_file_opens_project_only() {
    let project = TestProject::new("MyGame");
    let mut editor = editor_with(&project, empty_discovery(&project));

    assert!(editor.open_project("", -1, -1));

    let launches = editor.launcher.launches.borrow();
    assert_eq!(launches[0].1, project.root().to_str().unwrap().replace('\\', "/"));
}

#[test]
fn test_project_with_spaces_is_quoted() {
    let project = TestProject::new("My Game");
    let editor = editor_with(&project, empty_discovery(&project));

    let args = editor.build_open_args("/work/My Game/Assets/A.cs", 3, -1);
    let root = project.root().to_str().unwrap().replace('\\', "/");
    assert_eq!(args, format!("\"{}\" \"/work/My Game/Assets/A.cs:3\"", root));
}

#[test]
fn test_resolution_prefers_explicit_path() {
    let project = TestProject::new("MyGame");
    let mut editor = editor_with(&project, empty_discovery(&project));
    editor.preferences_mut().set_current_editor_path("/usr/bin/zed").unwrap();
    editor.initialize("/custom/zed-nightly/zed");

    assert_eq!(editor.resolve_editor_path().as_deref(), Some("/custom/zed-nightly/zed"));
}

#[test]
fn test_resolution_uses_current_editor_only_if_zed() {
    let project = TestProject::new("MyGame");
    let mut editor = editor_with(&project, empty_discovery(&project));

    editor.preferences_mut().set_current_editor_path("/usr/bin/code").unwrap();
    assert_eq!(editor.resolve_editor_path().as_deref(), Some("zed"));

    editor.preferences_mut().set_current_editor_path("/usr/bin/zed").unwrap();
    assert_eq!(editor.resolve_editor_path().as_deref(), Some("/usr/bin/zed"));
}

#[test]
fn test_resolution_falls_back_to_first_discovered() {
    let project = TestProject::new("MyGame");
    let local = project.root().join("no-local");
    let installed = local.join("Programs").join("Zed").join("zed.exe");
    fs::create_dir_all(installed.parent().unwrap()).unwrap();
    fs::write(&installed, "").unwrap();

    let editor = editor_with(&project, empty_discovery(&project));
    assert_eq!(
        editor.resolve_editor_path(),
        Some(installed.to_string_lossy().into_owned())
    );
}

#[test]
fn test_launch_failure_is_reported_as_false() {
    let project = TestProject::new("MyGame");
    let mut editor = ZedCodeEditor::new(
        UnityProject::new(project.root().to_path_buf()),
        empty_discovery(&project),
        Vec::<AssemblyDescriptor>::new(),
        SystemLauncher,
        MemoryPreferenceStore::new(),
    );
    let missing = project.root().join("missing-zed");
    editor.initialize(missing.to_str().unwrap());

    assert!(!editor.open_project("", -1, -1));
}

#[test]
fn test_launcher_result_is_forwarded() {
    let project = TestProject::new("MyGame");
    let mut editor = ZedCodeEditor::new(
        UnityProject::new(project.root().to_path_buf()),
        empty_discovery(&project),
        Vec::<AssemblyDescriptor>::new(),
        RecordingLauncher::default(),
        MemoryPreferenceStore::new(),
    );

    assert!(!editor.open_project("", -1, -1));
    assert_eq!(editor.launcher.launches.borrow().len(), 1);
}

#[test]
fn test_sync_all_generates_projects() {
    let project = TestProject::new("MyGame");
    let mut editor = editor_with(&project, empty_discovery(&project));

    assert_eq!(editor.sync_all().unwrap(), 2);
    assert!(project.root().join("Game.Core.csproj").is_file());
    assert!(project.root().join("MyGame.sln").is_file());
}

#[test]
fn test_sync_if_needed_ignores_non_script_assets() {
    let project = TestProject::new("MyGame");
    let mut editor = editor_with(&project, empty_discovery(&project));

    let synced = editor
        .sync_if_needed(
            &strings(&["Assets/Textures/logo.png"]),
            &[],
            &strings(&["Assets/Scenes/Main.unity"]),
            &[],
            &strings(&["Assets/Audio/theme.ogg"]),
        )
        .unwrap();

    assert!(!synced);
    assert_eq!(editor.assemblies.calls.get(), 0);
    assert!(!project.root().join("MyGame.sln").exists());
}

#[test]
fn test_sync_if_needed_regenerates_on_script_change() {
    let project = TestProject::new("MyGame");
    let mut editor = editor_with(&project, empty_discovery(&project));

    let imported = strings(&["Assets/Textures/logo.png", "Assets/Core/Player.cs"]);
    let synced = editor
        .sync_if_needed(&[], &[], &[], &[], &imported)
        .unwrap();

    assert!(synced);
    assert_eq!(editor.assemblies.calls.get(), 1);
    assert!(project.root().join("MyGame.sln").is_file());
}

#[test]
fn test_sync_if_needed_checks_every_change_set() {
    let project = TestProject::new("MyGame");
    let mut editor = editor_with(&project, empty_discovery(&project));

    let deleted = strings(&["Assets/Old.CS"]);
    let moved = strings(&["Assets/Game.asmdef"]);
    let moved_from = strings(&["Assets/Ext.asmref"]);

    assert!(editor.sync_if_needed(&[], &deleted, &[], &[], &[]).unwrap());
    assert!(editor.sync_if_needed(&[], &[], &moved, &[], &[]).unwrap());
    assert!(editor.sync_if_needed(&[], &[], &[], &moved_from, &[]).unwrap());
    assert_eq!(editor.assemblies.calls.get(), 3);
}

#[test]
fn test_sync_if_needed_respects_preference() {
    let project = TestProject::new("MyGame");
    let mut editor = editor_with(&project, empty_discovery(&project));
    editor.preferences_mut().set_sync_on_change(false).unwrap();

    let synced = editor
        .sync_if_needed(&strings(&["Assets/Core/Player.cs"]), &[], &[], &[], &[])
        .unwrap();

    assert!(!synced);
    assert_eq!(editor.assemblies.calls.get(), 0);
}

#[test]
fn test_affects_projects() {
    assert!(affects_projects("Assets/Player.cs"));
    assert!(affects_projects("Assets/PLAYER.CS"));
    assert!(affects_projects("Packages/com.game/Runtime/Game.asmdef"));
    assert!(affects_projects("Assets/Ext.asmref"));
    assert!(!affects_projects("Assets/logo.png"));
    assert!(!affects_projects("Assets/Player.cs.meta"));
    assert!(!affects_projects("Assets/cs"));
}
