/*!
 * Tests for production element extraction functionality
 */

use scenebreak::document::{Setting, TimeOfDay};
use scenebreak::extractor::{
    ElementExtractor, EntityKind, EntityTagger, GazetteerSet, TaggedEntity,
};

/// Tagger returning a fixed entity list, independent of the input text
struct StaticTagger(Vec<TaggedEntity>);

impl EntityTagger for StaticTagger {
    fn tag(&self, _text: &str) -> anyhow::Result<Vec<TaggedEntity>> {
        Ok(self.0.clone())
    }
    fn name(&self) -> &str {
        "static"
    }
}

/// Test header-style location extraction with a time suffix
#[test]
fn test_extractor_withScriptHeader_shouldSplitLocationAndTime() {
    let extractor = ElementExtractor::with_defaults();
    let elements = extractor.extract("ЧЕЛЮСКИН. КАЮТ-КОМПАНИЯ – НОЧЬ\nЭкипаж за столом.");

    assert_eq!(elements.location_object.as_deref(), Some("ЧЕЛЮСКИН"));
    assert_eq!(elements.location_sub_object.as_deref(), Some("КАЮТ-КОМПАНИЯ"));
    assert_eq!(elements.time_of_day, Some(TimeOfDay::Night));
}

/// Test explicitly marked object/sub-object pairs
#[test]
fn test_extractor_withExplicitMarkers_shouldUseThemFirst() {
    let extractor = ElementExtractor::with_defaults();
    let elements = extractor.extract("Объект: Больница. Подобъект: Приемный покой");

    assert_eq!(elements.location_object.as_deref(), Some("Больница"));
    assert_eq!(elements.location_sub_object.as_deref(), Some("Приемный покой"));
}

/// Test the time-of-day tie break: night wins over day
#[test]
fn test_extractor_withConflictingTimes_nightShouldWin() {
    let extractor = ElementExtractor::with_defaults();
    let elements = extractor.extract("Весь день они ждали, и только ночью пришел ответ.");
    assert_eq!(elements.time_of_day, Some(TimeOfDay::Night));
}

/// Test interior/exterior classification with both kinds present
#[test]
fn test_extractor_withMixedSetting_interiorShouldShortCircuit() {
    let extractor = ElementExtractor::with_defaults();
    let elements = extractor.extract("В офисе душно, на улице дождь.");
    assert_eq!(elements.setting, Some(Setting::Interior));
}

/// Test character extraction from cue lines plus tagger persons
#[test]
fn test_extractor_characters_cuesComeBeforeTaggerPersons() {
    let tagger = StaticTagger(vec![TaggedEntity::new(EntityKind::Person, "Шмидт")]);
    let extractor = ElementExtractor::new(GazetteerSet::default(), Box::new(tagger));

    let text = "СОМОВ\nГде радист?\n\nКРЕНКЕЛЬ\nЗдесь.";
    let elements = extractor.extract(text);

    assert_eq!(elements.characters, vec!["Сомов", "Кренкель", "Шмидт"]);
}

/// Test that extras carry explicit counts and unknown counts
#[test]
fn test_extractor_extras_shouldRenderCounts() {
    let extractor = ElementExtractor::with_defaults();
    let elements = extractor.extract("У трапа толпа (25), вдалеке прохожие.");

    assert!(elements.extras.contains(&"Толпа (25)".to_string()));
    assert!(elements.extras.contains(&"Прохожие (?)".to_string()));
}

/// Test that props keep their inflected surface forms
#[test]
fn test_extractor_props_shouldKeepInflectedForms() {
    let extractor = ElementExtractor::with_defaults();
    let elements = extractor.extract("Он прячет документы и кошелек в сейф.");

    assert!(elements.props.iter().any(|p| p == "документы"));
    assert!(elements.props.iter().any(|p| p == "кошелек"));
}

/// Test category ordering: output follows first position in the text
#[test]
fn test_extractor_categories_orderedByTextPosition() {
    let extractor = ElementExtractor::with_defaults();
    let elements = extractor.extract("Сначала пожар, затем взрыв.");

    assert_eq!(elements.special_effects, vec!["Пожар", "Взрыв"]);
}

/// Test that the extractor is a pure function of its input
#[test]
fn test_extractor_repeatedCalls_shouldBeByteIdentical() {
    let extractor = ElementExtractor::with_defaults();
    let text = "ЧЕЛЮСКИН. ПАЛУБА – ДЕНЬ\nСОМОВ\nЭкипаж (40) у борта. Взрыв. Собака лает.";

    let first = extractor.extract(text);
    for _ in 0..5 {
        assert_eq!(extractor.extract(text), first);
    }
}

/// Test that an empty scene body yields a fully absent element set
#[test]
fn test_extractor_withEmptyBody_shouldYieldEmptySet() {
    let extractor = ElementExtractor::with_defaults();
    assert!(extractor.extract("").is_empty());
}
