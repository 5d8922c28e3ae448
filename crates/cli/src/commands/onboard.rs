//! `studycast onboard` — first-time setup.

use studycast_config::AppConfig;

const SAMPLE_BANK: &str = r#"[
  {
    "class": "Class 11",
    "subject": "Biology",
    "chapter": "Photosynthesis",
    "concepts": ["Light reaction", "Calvin cycle", "Chlorophyll"],
    "templates": ["What is {{concept}}? Explain.", "Describe the role of {{concept}} in {{chapter}}."],
    "importance": "High",
    "tag": "Board Exam"
  },
  {
    "class": "Class 11",
    "subject": "History",
    "chapter": "Mughal Empire",
    "concepts": ["Akbar's reforms", "Land revenue system"],
    "importance": "Medium",
    "tag": "Short Question"
  }
]
"#;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = AppConfig::config_dir();
    let config_path = config_dir.join("config.toml");
    let config = AppConfig::default();

    println!("📘 studycast — First-Time Setup");
    println!("===============================\n");

    // Create directories
    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
        println!("✅ Created config directory: {}", config_dir.display());
    } else {
        println!("  Config directory exists: {}", config_dir.display());
    }

    if !config.data_dir.exists() {
        std::fs::create_dir_all(&config.data_dir)?;
        println!("✅ Created data directory: {}", config.data_dir.display());
    }

    // Seed a sample bank so `preview` works out of the box
    let sample_path = config.data_dir.join("data_class11.json");
    if !sample_path.exists() {
        std::fs::write(&sample_path, SAMPLE_BANK)?;
        println!("✅ Created sample bank: {}", sample_path.display());
    }

    // Create config file
    if config_path.exists() {
        println!("\n⚠️  Config already exists at: {}", config_path.display());
        println!("   Edit it manually or delete and re-run onboard.\n");
    } else {
        std::fs::write(&config_path, AppConfig::default_toml())?;
        println!("✅ Created config.toml at: {}", config_path.display());
        println!("\n📝 Next steps:");
        println!("   1. Edit {} and set bot_token and channel", config_path.display());
        println!("   2. Trim the banks list to the files you actually have");
        println!("   3. Run: studycast preview");
        println!("   4. Schedule: studycast post (e.g. one cron entry per day)\n");
    }

    println!("🎉 Setup complete!\n");

    Ok(())
}
