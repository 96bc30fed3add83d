/*!
 * Keyword gazetteers for production-element extraction.
 *
 * Gazetteers are closed, fixed keyword lists matched against lowercased
 * scene text. They are immutable data owned by the extractor instance,
 * not global mutable state, so tests can substitute smaller tables.
 * Iteration order is the declaration order; category output is ordered by
 * first match position in the text, so table order never depends on set
 * iteration.
 */

use crate::document::TimeOfDay;

/// The full keyword configuration for one extractor instance.
#[derive(Debug, Clone)]
pub struct GazetteerSet {
    /// Location nouns, object/sub-object candidates
    pub locations: Vec<String>,

    /// Surface form -> canonical time of day
    pub time_lexicon: Vec<(String, TimeOfDay)>,

    /// Interior-coded location keywords (checked first, short-circuits)
    pub interior: Vec<String>,

    /// Exterior-coded location keywords
    pub exterior: Vec<String>,

    /// Crowd/extras indicators
    pub extras: Vec<String>,

    /// Prop keywords
    pub props: Vec<String>,

    /// Picture-vehicle keywords
    pub vehicles: Vec<String>,

    /// Special-effects keywords
    pub special_effects: Vec<String>,

    /// Special-equipment keywords
    pub equipment: Vec<String>,

    /// Animal keywords
    pub animals: Vec<String>,

    /// Stunt-work keywords
    pub stunts: Vec<String>,

    /// Known entity-recognizer false positives for locations
    pub location_exclusions: Vec<String>,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for GazetteerSet {
    fn default() -> Self {
        Self {
            locations: words(&[
                "улица", "кабинет", "коридор", "зал", "кафе", "ресторан", "дом",
                "площадь", "станция", "больница", "офис", "квартира", "комната",
                "парк", "сквер", "берег", "лед", "море", "океан", "пролив",
                "кают-компания", "каюткомпания", "палуба", "радиорубка",
                "машинное отделение", "корабль", "судно", "пароход",
            ]),
            time_lexicon: vec![
                ("ночью".to_string(), TimeOfDay::Night),
                ("ночное".to_string(), TimeOfDay::Night),
                ("ночь".to_string(), TimeOfDay::Night),
                ("днем".to_string(), TimeOfDay::Day),
                ("дневное".to_string(), TimeOfDay::Day),
                ("день".to_string(), TimeOfDay::Day),
                ("полдень".to_string(), TimeOfDay::Day),
                ("утром".to_string(), TimeOfDay::Morning),
                ("утреннее".to_string(), TimeOfDay::Morning),
                ("утро".to_string(), TimeOfDay::Morning),
                ("рассвет".to_string(), TimeOfDay::Morning),
                ("вечером".to_string(), TimeOfDay::Evening),
                ("вечернее".to_string(), TimeOfDay::Evening),
                ("вечер".to_string(), TimeOfDay::Evening),
                ("сумерки".to_string(), TimeOfDay::Evening),
                ("закат".to_string(), TimeOfDay::Evening),
            ],
            interior: words(&[
                "кабинет", "комната", "дом", "квартира", "офис", "клуб",
                "кафе", "ресторан", "кают-компания", "радиорубка",
            ]),
            exterior: words(&[
                "улица", "площадь", "парк", "сквер", "на улице",
                "на площади", "берег", "море", "лед",
            ]),
            extras: words(&[
                "толпа", "массовка", "зрители", "прохожие", "официанты",
                "публика", "студенты", "экипаж", "челюскинцы",
            ]),
            props: words(&[
                "телефон", "ноутбук", "компьютер", "деньги", "кошелек",
                "ключи", "документы", "книга", "газета", "часы",
                "пистолет", "ружье", "радио", "инструмент", "сигареты",
                "кольцо", "стол", "стул", "папка", "портфель", "сумка",
            ]),
            vehicles: words(&[
                "автомобиль", "машина", "такси", "автобус", "трамвай",
                "метро", "поезд", "мотоцикл", "велосипед",
            ]),
            special_effects: words(&[
                "взрыв", "пожар", "пиротехника", "дым", "огонь", "свет",
                "молния", "дождь", "снег", "ветер",
            ]),
            equipment: words(&[
                "коптер", "дрон", "камера", "объектив", "микрофон",
                "освещение", "подъемник", "кран", "хромакей", "хейзер",
            ]),
            animals: words(&[
                "собака", "кошка", "лошадь", "голубь", "медведь",
                "щенок", "котенок", "птица",
            ]),
            stunts: words(&[
                "трюк", "каскадер", "каскадёр", "драка", "падение",
                "погоня", "прыжок",
            ]),
            location_exclusions: words(&[
                "земли", "земля", "земле", "землю", "сома", "сомову", "сомова",
            ]),
        }
    }
}

impl GazetteerSet {
    /// Create an empty gazetteer set; useful as a base for tests.
    pub fn empty() -> Self {
        Self {
            locations: Vec::new(),
            time_lexicon: Vec::new(),
            interior: Vec::new(),
            exterior: Vec::new(),
            extras: Vec::new(),
            props: Vec::new(),
            vehicles: Vec::new(),
            special_effects: Vec::new(),
            equipment: Vec::new(),
            animals: Vec::new(),
            stunts: Vec::new(),
            location_exclusions: Vec::new(),
        }
    }
}
