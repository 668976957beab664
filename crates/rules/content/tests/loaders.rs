use std::fs;

use rules_content::{AncestryLoader, BackgroundLoader, ConfigLoader, ContentFactory, OriginPicks};
use rules_core::{
    Ability, AttributeModifier, CriticalRule, RuleError, RulesConfig, build_starting_attributes,
};
use tempfile::TempDir;

// ============================================================================
// Bundled content
// ============================================================================

#[test]
fn bundled_content_loads() {
    let factory = ContentFactory::bundled();

    let config = factory.load_config().expect("bundled rules.toml");
    assert_eq!(config, RulesConfig::default());

    let origins = factory.load_origins().expect("bundled catalogs");
    let dwarf = origins.ancestry("dwarf").expect("dwarf ancestry");
    assert_eq!(dwarf.hit_points, 10);
    assert_eq!(dwarf.speed, 20);
    assert_eq!(dwarf.flaws, vec![AttributeModifier::Charisma]);

    let human = origins.ancestry("Human").expect("human ancestry");
    assert!(human.flaws.is_empty());
    assert!(origins.background("warrior").is_some());
}

#[test]
fn bundled_origins_build_a_character() {
    let factory = ContentFactory::bundled();
    let config = factory.load_config().expect("bundled rules.toml");
    let origins = factory.load_origins().expect("bundled catalogs");

    let picks = OriginPicks {
        free: vec![
            Ability::Strength,
            Ability::Dexterity,
            Ability::Constitution,
            Ability::Wisdom,
        ],
        ancestry: vec![Ability::Strength],
        background: vec![Ability::Strength, Ability::Dexterity],
    };
    let boosts = origins
        .starting_boosts("Dwarf", "Warrior", &picks)
        .expect("valid picks");
    let block = build_starting_attributes(&boosts, &config).expect("legal character");

    assert_eq!(block.scores(), [13, 12, 12, 10, 12, 9]);
}

#[test]
fn limited_choice_outside_its_list_is_rejected() {
    let factory = ContentFactory::bundled();
    let origins = factory.load_origins().expect("bundled catalogs");

    let picks = OriginPicks {
        free: vec![Ability::Strength; 4],
        ancestry: vec![Ability::Dexterity, Ability::Wisdom],
        background: vec![Ability::Charisma, Ability::Dexterity],
    };
    let boosts = origins
        .starting_boosts("Human", "Warrior", &picks)
        .expect("pick counts line up");

    let err = build_starting_attributes(&boosts, &RulesConfig::default())
        .expect_err("warrior cannot boost charisma");
    assert_eq!(err.error_code(), "ATTRIBUTE_INVALID_MODIFIER_TARGET");
}

// ============================================================================
// Loaders against temporary files
// ============================================================================

#[test]
fn config_loader_reads_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("rules.toml");
    fs::write(&path, "attribute_max = 25\ncritical_rule = \"same_side\"\n").expect("write");

    let config = ConfigLoader::load(&path).expect("valid config");
    assert_eq!(config.attribute_min, RulesConfig::DEFAULT_ATTRIBUTE_MIN);
    assert_eq!(config.attribute_max, 25);
    assert_eq!(config.critical_rule, CriticalRule::SameSide);
}

#[test]
fn config_loader_names_the_file_on_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("rules.toml");
    fs::write(&path, "attribute_min = \"low\"").expect("write");

    let err = ConfigLoader::load(&path).expect_err("bad type");
    assert!(err.to_string().contains("rules.toml"));
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let factory = ContentFactory::new(dir.path());

    assert_eq!(factory.load_config().expect("defaults"), RulesConfig::default());
    assert!(factory.load_origins().is_err());
}

#[test]
fn catalog_loaders_read_ron() {
    let dir = TempDir::new().expect("temp dir");
    let ancestries = dir.path().join("ancestries.ron");
    let backgrounds = dir.path().join("backgrounds.ron");
    fs::write(
        &ancestries,
        r#"(
            ancestries: [
                (name: "Orc", hit_points: 10, speed: 25, boosts: [Strength, Free]),
            ],
        )"#,
    )
    .expect("write");
    fs::write(
        &backgrounds,
        r#"(
            backgrounds: [
                (name: "Sailor", boosts: [LimitedChoice([Strength, Dexterity]), Free]),
            ],
        )"#,
    )
    .expect("write");

    let ancestries = AncestryLoader::load(&ancestries).expect("ancestries");
    assert_eq!(ancestries.len(), 1);
    assert_eq!(ancestries[0].name, "Orc");
    assert!(ancestries[0].flaws.is_empty());

    let backgrounds = BackgroundLoader::load(&backgrounds).expect("backgrounds");
    let choice = match backgrounds[0].boosts[0] {
        AttributeModifier::LimitedChoice(choice) => choice,
        other => panic!("expected a limited choice, got {other}"),
    };
    assert!(choice.contains(Ability::Dexterity));
    assert!(!choice.contains(Ability::Wisdom));
}

#[test]
fn limited_choice_needs_two_options() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("backgrounds.ron");
    fs::write(
        &path,
        r#"(backgrounds: [(name: "Hermit", boosts: [LimitedChoice([Wisdom])])])"#,
    )
    .expect("write");

    assert!(BackgroundLoader::load(&path).is_err());
}
