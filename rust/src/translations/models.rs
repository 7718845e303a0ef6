// Файл: translations/models.rs
// Классы повреждений поверхности и их русские названия.

/// Класс повреждения, как его возвращает модель детекции.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DamageClass {
    Crazing,
    Inclusion,
    Patches,
    PittedSurface,
    RolledInScale,
    Scratches,
}

impl DamageClass {
    pub const ALL: [DamageClass; 6] = [
        DamageClass::Crazing,
        DamageClass::Inclusion,
        DamageClass::Patches,
        DamageClass::PittedSurface,
        DamageClass::RolledInScale,
        DamageClass::Scratches,
    ];

    /// Ключ класса в ответах модели.
    pub fn key(&self) -> &'static str {
        match self {
            DamageClass::Crazing => "crazing",
            DamageClass::Inclusion => "inclusion",
            DamageClass::Patches => "patches",
            DamageClass::PittedSurface => "pitted_surface",
            DamageClass::RolledInScale => "rolled-in_scale",
            DamageClass::Scratches => "scratches",
        }
    }

    pub fn ru_label(&self) -> &'static str {
        match self {
            DamageClass::Crazing => "Трещины",
            DamageClass::Inclusion => "Включения",
            DamageClass::Patches => "Бляшки",
            DamageClass::PittedSurface => "Каверны",
            DamageClass::RolledInScale => "Окалины",
            DamageClass::Scratches => "Царапины",
        }
    }

    /// Точное совпадение ключа, регистр важен.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.key() == key)
    }
}
