use chrono::NaiveDate;
use sitetheme_services::{GeneratorSettings, ThemeFileService};
use sitetheme_theme::config::ThemeConfig;
use sitetheme_theme::error::ThemeError;
use std::fs;

fn sample_theme() -> ThemeConfig {
    ThemeConfig::from_json(
        r##"{
            "templateId": "modern-business",
            "title": "Mon Site Web",
            "colors": { "primary": "#000000", "accent": "#FFD700" },
            "design": { "spacing": "spacious", "borderRadius": "small" },
            "content": { "heroHeadline": "Bienvenue", "features": ["Rapide", "Fiable"] },
            "layout": { "header": { "sticky": true, "style": "centered" } }
        }"##,
    )
    .unwrap()
}

#[tokio::test]
async fn test_generate_writes_all_files() {
    let themes_dir = tempfile::tempdir().unwrap();
    let service = ThemeFileService::with_themes_dir(themes_dir.path());
    let at = NaiveDate::from_ymd_opt(2025, 7, 19)
        .and_then(|d| d.and_hms_opt(13, 6, 20))
        .unwrap();

    assert!(!service.theme_files_exist("amine"));

    let files = service
        .generate_theme_files_at("amine", &sample_theme(), at)
        .await
        .unwrap();

    assert_eq!(files.dir, themes_dir.path().join("amine"));
    assert_eq!(files.written.len(), 3);
    assert!(service.theme_files_exist("amine"));

    let css = fs::read_to_string(files.dir.join("theme.css")).unwrap();
    assert!(css.contains("/* Generated at: 2025-07-19T13:06:20"));
    assert!(css.contains("  --theme-primary: #000000;\n"));
    assert!(css.contains("  --theme-spacing: 1.5rem;\n"));
    assert!(css.contains("  --theme-radius: 4px;\n"));
    assert!(css.contains("position: sticky;"));

    let js = fs::read_to_string(files.dir.join("config.js")).unwrap();
    assert!(js.contains("  templateId: 'modern-business',\n"));
    assert!(js.contains("    features: ['Rapide', 'Fiable']"));
    assert!(js.contains("window.THEME_CONFIG.applyTheme = function() {"));

    let utilities = fs::read_to_string(files.dir.join("utilities.css")).unwrap();
    assert!(utilities.starts_with("/* Theme Utilities CSS */"));
}

#[tokio::test]
async fn test_regenerate_replaces_previous_theme() {
    let themes_dir = tempfile::tempdir().unwrap();
    let service = ThemeFileService::with_themes_dir(themes_dir.path());

    service
        .generate_theme_files("shop", &sample_theme())
        .await
        .unwrap();
    let replacement = ThemeConfig::new().with_color("primary", "#3B82F6");
    service
        .generate_theme_files("shop", &replacement)
        .await
        .unwrap();

    let js = fs::read_to_string(themes_dir.path().join("shop").join("config.js")).unwrap();
    assert!(js.contains("primary: '#3B82F6'"));
    assert!(!js.contains("accent"));
    assert!(!js.contains("modern-business"));
}

#[tokio::test]
async fn test_delete_removes_directory() {
    let themes_dir = tempfile::tempdir().unwrap();
    let service = ThemeFileService::with_themes_dir(themes_dir.path());

    service
        .generate_theme_files("gone", &sample_theme())
        .await
        .unwrap();
    assert!(service.theme_files_exist("gone"));

    service.delete_theme_files("gone").await.unwrap();
    assert!(!service.theme_files_exist("gone"));
    assert!(!themes_dir.path().join("gone").exists());

    // Deleting again is fine.
    service.delete_theme_files("gone").await.unwrap();
}

#[tokio::test]
async fn test_partial_theme_does_not_count_as_existing() {
    let themes_dir = tempfile::tempdir().unwrap();
    let settings = GeneratorSettings {
        themes_dir: themes_dir.path().to_path_buf(),
        generate_utilities: false,
    };
    let service = ThemeFileService::with_settings(settings);

    let files = service
        .generate_theme_files("lite", &sample_theme())
        .await
        .unwrap();

    assert_eq!(files.written.len(), 2);
    assert!(files.dir.join("theme.css").exists());
    assert!(!files.dir.join("utilities.css").exists());
    assert!(!service.theme_files_exist("lite"));
}

#[tokio::test]
async fn test_rejects_unsafe_subdomains() {
    let themes_dir = tempfile::tempdir().unwrap();
    let service = ThemeFileService::with_themes_dir(themes_dir.path().join("themes"));

    for subdomain in ["", "..", "../escape", "a/b"] {
        let result = service.generate_theme_files(subdomain, &sample_theme()).await;
        assert!(
            matches!(result, Err(ThemeError::InvalidSubdomain { .. })),
            "{subdomain:?}"
        );
        assert!(matches!(
            service.delete_theme_files(subdomain).await,
            Err(ThemeError::InvalidSubdomain { .. })
        ));
    }
    assert!(!themes_dir.path().join("themes").exists());
}

#[tokio::test]
async fn test_disabling_utilities_removes_stale_file() {
    let themes_dir = tempfile::tempdir().unwrap();
    let full = ThemeFileService::with_themes_dir(themes_dir.path());
    full.generate_theme_files("shop", &sample_theme())
        .await
        .unwrap();
    assert!(full.theme_files_exist("shop"));

    let lite = ThemeFileService::with_settings(GeneratorSettings {
        themes_dir: themes_dir.path().to_path_buf(),
        generate_utilities: false,
    });
    let files = lite
        .generate_theme_files("shop", &sample_theme())
        .await
        .unwrap();

    assert_eq!(files.written.len(), 2);
    assert!(!files.dir.join("utilities.css").exists());
    assert!(!full.theme_files_exist("shop"));
}
