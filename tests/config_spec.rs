use christophers_kitchen::config::AppConfig;
use christophers_kitchen::store::SeedSet;
use speculate2::speculate;
use tempfile::TempDir;

speculate! {
    before {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("kitchen").join("config.json");
    }

    describe "load_from" {
        it "returns defaults when the file is missing" {
            let config = AppConfig::load_from(&path).expect("Failed to load config");

            assert_eq!(config, AppConfig::default());
            assert_eq!(config.seed, SeedSet::Sample);
            assert_eq!(config.currency_symbol, "R");
            assert!(config.confirm_destructive);
        }

        it "fills missing fields with defaults" {
            std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create dir");
            std::fs::write(&path, r#"{ "seed": "empty" }"#).expect("Failed to write config");

            let config = AppConfig::load_from(&path).expect("Failed to load config");

            assert_eq!(config.seed, SeedSet::Empty);
            assert_eq!(config.currency_symbol, "R");
            assert!(config.confirm_destructive);
        }

        it "fails on malformed json" {
            std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create dir");
            std::fs::write(&path, "{ seed = empty").expect("Failed to write config");

            let err = AppConfig::load_from(&path).unwrap_err();
            assert!(format!("{:#}", err).contains("Failed to parse config file"));
        }

        it "fails on an unknown seed set" {
            std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create dir");
            std::fs::write(&path, r#"{ "seed": "brunch" }"#).expect("Failed to write config");

            assert!(AppConfig::load_from(&path).is_err());
        }
    }

    describe "save_to" {
        it "writes a file that loads back" {
            let config = AppConfig {
                seed: SeedSet::Empty,
                currency_symbol: "$".to_string(),
                confirm_destructive: false,
            };

            config.save_to(&path).expect("Failed to save config");

            assert!(path.exists());
            assert_eq!(AppConfig::load_from(&path).expect("Failed to load config"), config);
        }
    }
}
