//! Pipeline tests driven through a recording fake of the external tools.

use raypack::packager::{Error, Packager, PlatformTools, Result, Settings, SettingsBuilder};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Template shipped with the crate, reused verbatim by the tests.
const TEMPLATE: &str = include_str!("../packaging/Info.plist.template");

/// One recorded external tool invocation.
#[derive(Debug, Clone, PartialEq)]
enum ToolCall {
    Compile {
        source: PathBuf,
        output: PathBuf,
    },
    Sign {
        bundle: PathBuf,
        identity: String,
    },
    MakeImage {
        volume_name: String,
        output: PathBuf,
        /// Top-level entries of the staged source folder, sorted.
        entries: Vec<String>,
    },
}

/// Recording fake standing in for clang, codesign, and hdiutil.
///
/// `compile` and `make_image` write their output files so later stages
/// observe the same filesystem effects the real tools would produce.
#[derive(Default)]
struct FakeTools {
    calls: Mutex<Vec<ToolCall>>,
}

impl FakeTools {
    fn calls(&self) -> Vec<ToolCall> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl PlatformTools for &FakeTools {
    async fn compile(&self, source: &Path, output: &Path) -> Result<()> {
        self.calls.lock().expect("calls lock").push(ToolCall::Compile {
            source: source.to_path_buf(),
            output: output.to_path_buf(),
        });
        std::fs::write(output, b"compiled game")?;
        Ok(())
    }

    async fn sign(&self, bundle: &Path, identity: &str) -> Result<()> {
        self.calls.lock().expect("calls lock").push(ToolCall::Sign {
            bundle: bundle.to_path_buf(),
            identity: identity.to_string(),
        });
        Ok(())
    }

    async fn make_image(
        &self,
        src_folder: &Path,
        volume_name: &str,
        output: &Path,
    ) -> Result<()> {
        let mut entries: Vec<String> = std::fs::read_dir(src_folder)?
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        entries.sort();

        self.calls.lock().expect("calls lock").push(ToolCall::MakeImage {
            volume_name: volume_name.to_string(),
            output: output.to_path_buf(),
            entries,
        });
        std::fs::write(output, b"dmg contents")?;
        Ok(())
    }
}

/// Creates a project directory with the template in place.
fn project_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    let template = dir.path().join("packaging/Info.plist.template");
    std::fs::create_dir_all(template.parent().expect("template parent")).expect("mkdir");
    std::fs::write(template, TEMPLATE).expect("write template");
    dir
}

/// Writes a stand-in prebuilt executable and returns its path.
fn write_executable(dir: &Path) -> PathBuf {
    let path = dir.join("game");
    std::fs::write(&path, b"prebuilt game").expect("write executable");
    path
}

fn settings(dir: &Path) -> SettingsBuilder {
    SettingsBuilder::new()
        .project_dir(dir)
        .executable(write_executable(dir))
}

fn read_plist(settings: &Settings) -> String {
    std::fs::read_to_string(settings.bundle_path().join("Contents/Info.plist"))
        .expect("read Info.plist")
}

#[tokio::test]
async fn defaults_produce_documented_artifacts() {
    let dir = project_dir();
    let settings = settings(dir.path()).build().expect("settings");
    let tools = FakeTools::default();

    let artifact = Packager::new(settings.clone(), &tools)
        .run()
        .await
        .expect("pipeline");

    assert_eq!(artifact.bundle, dir.path().join("raylib-game.app"));
    assert_eq!(artifact.disk_image, dir.path().join("raylib-game-1.0.dmg"));
    assert!(artifact.disk_image.is_file());
    assert_eq!(artifact.size, "dmg contents".len() as u64);
    assert_eq!(artifact.checksum.len(), 64);

    let executable = artifact.bundle.join("Contents/MacOS/raylib-game");
    assert!(executable.is_file());
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&executable).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    let plist = read_plist(&settings);
    assert!(plist.contains("<string>raylib-game</string>"));
    assert!(plist.contains("<string>com.example.raylibgame</string>"));
    assert!(plist.contains("<string>1.0</string>"));

    // Volume named after the app; bundle and Applications symlink staged.
    let calls = tools.calls();
    match calls.last() {
        Some(ToolCall::MakeImage {
            volume_name,
            entries,
            ..
        }) => {
            assert_eq!(volume_name, "raylib-game");
            #[cfg(unix)]
            assert_eq!(entries, &["Applications".to_string(), "raylib-game.app".to_string()]);
        }
        other => panic!("expected MakeImage as the final call, got {other:?}"),
    }
}

#[tokio::test]
async fn compiles_the_executable_when_missing() {
    let dir = project_dir();
    let executable = dir.path().join("main");
    std::fs::write(dir.path().join("main.c"), "int main(void) { return 0; }")
        .expect("write source");

    let settings = SettingsBuilder::new()
        .project_dir(dir.path())
        .executable(&executable)
        .build()
        .expect("settings");
    let tools = FakeTools::default();

    Packager::new(settings, &tools).run().await.expect("pipeline");

    assert_eq!(
        tools.calls().first(),
        Some(&ToolCall::Compile {
            source: dir.path().join("main.c"),
            output: executable.clone(),
        })
    );
    assert!(executable.is_file());
}

#[tokio::test]
async fn existing_executable_is_not_rebuilt() {
    let dir = project_dir();
    let settings = settings(dir.path()).build().expect("settings");
    let tools = FakeTools::default();

    Packager::new(settings, &tools).run().await.expect("pipeline");

    assert!(
        !tools
            .calls()
            .iter()
            .any(|c| matches!(c, ToolCall::Compile { .. }))
    );
}

#[tokio::test]
async fn missing_source_and_executable_is_fatal() {
    let dir = project_dir();
    let settings = SettingsBuilder::new()
        .project_dir(dir.path())
        .executable(dir.path().join("main"))
        .build()
        .expect("settings");
    let tools = FakeTools::default();

    let err = Packager::new(settings, &tools)
        .run()
        .await
        .expect_err("must fail without source or executable");
    assert!(err.to_string().contains("no executable"));
}

#[tokio::test]
async fn missing_template_creates_no_artifacts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = settings(dir.path()).build().expect("settings");
    let tools = FakeTools::default();

    let err = Packager::new(settings.clone(), &tools)
        .run()
        .await
        .expect_err("must fail without template");

    assert!(matches!(err, Error::TemplateMissing { .. }));
    assert!(!settings.bundle_path().exists());
    assert!(!settings.dmg_path().exists());
    assert!(tools.calls().is_empty());
}

#[tokio::test]
async fn icon_is_copied_and_named_in_the_descriptor() {
    let dir = project_dir();
    let icon = dir.path().join("icon.icns");
    std::fs::write(&icon, b"icns data").expect("write icon");

    let settings = settings(dir.path())
        .icon(Some(icon))
        .build()
        .expect("settings");
    let tools = FakeTools::default();

    Packager::new(settings.clone(), &tools).run().await.expect("pipeline");

    assert!(
        settings
            .bundle_path()
            .join("Contents/Resources/icon.icns")
            .is_file()
    );
    assert!(read_plist(&settings).contains("<string>icon.icns</string>"));
}

#[tokio::test]
async fn configured_but_absent_icon_leaves_the_field_empty() {
    let dir = project_dir();
    let settings = settings(dir.path())
        .icon(Some(dir.path().join("nope.icns")))
        .build()
        .expect("settings");
    let tools = FakeTools::default();

    Packager::new(settings.clone(), &tools).run().await.expect("pipeline");

    assert!(read_plist(&settings).contains("<key>CFBundleIconFile</key>\n\t<string></string>"));
}

#[tokio::test]
async fn signing_runs_against_the_bundle_before_imaging() {
    let dir = project_dir();
    let settings = settings(dir.path())
        .signing_identity(Some("Developer ID Application: Jane (TEAMID)".into()))
        .build()
        .expect("settings");
    let tools = FakeTools::default();

    let artifact = Packager::new(settings, &tools).run().await.expect("pipeline");

    let calls = tools.calls();
    let sign_idx = calls
        .iter()
        .position(|c| matches!(c, ToolCall::Sign { .. }))
        .expect("sign must be invoked");
    let image_idx = calls
        .iter()
        .position(|c| matches!(c, ToolCall::MakeImage { .. }))
        .expect("make_image must be invoked");
    assert!(sign_idx < image_idx);

    match &calls[sign_idx] {
        ToolCall::Sign { bundle, identity } => {
            assert_eq!(bundle, &artifact.bundle);
            assert_eq!(identity, "Developer ID Application: Jane (TEAMID)");
        }
        other => panic!("expected Sign, got {other:?}"),
    }
}

#[tokio::test]
async fn no_identity_means_no_signing() {
    let dir = project_dir();
    let settings = settings(dir.path()).build().expect("settings");
    let tools = FakeTools::default();

    Packager::new(settings, &tools).run().await.expect("pipeline");

    assert!(
        !tools
            .calls()
            .iter()
            .any(|c| matches!(c, ToolCall::Sign { .. }))
    );
}

#[tokio::test]
async fn rerun_fully_replaces_previous_artifacts() {
    let dir = project_dir();
    let settings = settings(dir.path()).build().expect("settings");
    let tools = FakeTools::default();

    let packager = Packager::new(settings.clone(), &tools);
    packager.run().await.expect("first run");

    // Plant leftovers a second run must not inherit.
    let stale = settings.bundle_path().join("Contents/stale.txt");
    std::fs::write(&stale, b"stale").expect("write stale file");
    std::fs::write(settings.dmg_path(), b"stale dmg").expect("overwrite dmg");

    packager.run().await.expect("second run");

    assert!(!stale.exists());
    assert_eq!(
        std::fs::read(settings.dmg_path()).expect("read dmg"),
        b"dmg contents"
    );
}

#[tokio::test]
async fn named_run_produces_matching_artifacts() {
    let dir = project_dir();
    let settings = settings(dir.path())
        .app_name("Foo")
        .version("2.3")
        .build()
        .expect("settings");
    let tools = FakeTools::default();

    let artifact = Packager::new(settings.clone(), &tools)
        .run()
        .await
        .expect("pipeline");

    assert_eq!(artifact.bundle, dir.path().join("Foo.app"));
    assert_eq!(artifact.disk_image, dir.path().join("Foo-2.3.dmg"));
    assert!(artifact.bundle.join("Contents/MacOS/Foo").is_file());

    let plist = read_plist(&settings);
    assert!(plist.contains("<string>Foo</string>"));
    assert!(plist.contains("<string>com.example.raylibgame</string>"));
    assert!(plist.contains("<string>2.3</string>"));
    assert!(plist.contains("<key>CFBundleIconFile</key>\n\t<string></string>"));

    // No identity configured, so the bundle stays unsigned.
    assert!(
        !tools
            .calls()
            .iter()
            .any(|c| matches!(c, ToolCall::Sign { .. }))
    );
}
