use super::Locale;

/// One translation: a lookup key with its Arabic and French strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub key: &'static str,
    pub ar: &'static str,
    pub fr: &'static str,
}

impl DictionaryEntry {
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ar => self.ar,
            Locale::Fr => self.fr,
        }
    }
}

const fn e(key: &'static str, ar: &'static str, fr: &'static str) -> DictionaryEntry {
    DictionaryEntry { key, ar, fr }
}

pub static DICTIONARY: &[DictionaryEntry] = &[
    // Site
    e("site.name", "الجمعية الثقافية", "Association culturelle"),
    e("site.tagline", "ثقافة، تراث وإبداع", "Culture, patrimoine et création"),
    // Navigation
    e("nav.home", "الرئيسية", "Accueil"),
    e("nav.about", "من نحن", "À propos"),
    e("nav.activities", "الأنشطة", "Activités"),
    e("nav.publications", "المنشورات", "Publications"),
    e("nav.members", "الأعضاء", "Membres"),
    e("nav.partners", "الشركاء", "Partenaires"),
    e("nav.channel", "القناة الثقافية", "Chaîne culturelle"),
    e("nav.contact", "اتصل بنا", "Contact"),
    e("nav.admin", "الإدارة", "Administration"),
    e("nav.language", "اللغة", "Langue"),
    // Public pages
    e("page.not_found", "الصفحة غير موجودة", "Page introuvable"),
    e("page.empty", "لا يوجد محتوى لهذه الصفحة بعد", "Aucun contenu pour cette page"),
    e("footer.rights", "جميع الحقوق محفوظة", "Tous droits réservés"),
    // Content aggregate
    e("content.element", "عنصر محتوى", "Élément de contenu"),
    e("content.list", "المحتوى", "Contenus"),
    // Admin
    e("admin.title", "إدارة المحتوى", "Gestion du contenu"),
    e("admin.page_filter", "الصفحة", "Page"),
    e("admin.all_pages", "كل الصفحات", "Toutes les pages"),
    e("admin.add", "إضافة محتوى", "Ajouter un contenu"),
    e("admin.new", "محتوى جديد", "Nouveau contenu"),
    e("admin.edit", "تعديل", "Modifier"),
    e("admin.delete", "حذف", "Supprimer"),
    e("admin.save", "حفظ", "Enregistrer"),
    e("admin.create", "إنشاء", "Créer"),
    e("admin.cancel", "إلغاء", "Annuler"),
    e("admin.confirm_delete", "هل تريد حذف هذا العنصر؟", "Supprimer cet élément ?"),
    e("admin.reset_defaults", "استعادة المحتوى الافتراضي", "Restaurer le contenu par défaut"),
    e(
        "admin.confirm_reset",
        "سيتم استبدال كل المحتوى بالمحتوى الافتراضي. متابعة؟",
        "Tout le contenu sera remplacé par le contenu par défaut. Continuer ?",
    ),
    e("admin.load_server", "تحميل من الخادم", "Charger depuis le serveur"),
    e("admin.publish_server", "نشر على الخادم", "Publier sur le serveur"),
    e("admin.published", "تم النشر على الخادم", "Publié sur le serveur"),
    e("admin.loaded", "تم التحميل من الخادم", "Chargé depuis le serveur"),
    e("admin.count", "عدد العناصر", "Nombre d'éléments"),
    e("admin.col.page", "الصفحة", "Page"),
    e("admin.col.section", "القسم", "Section"),
    e("admin.col.field", "الحقل", "Champ"),
    e("admin.col.label", "التسمية", "Libellé"),
    e("admin.col.type", "النوع", "Type"),
    e("admin.col.value", "القيمة", "Valeur"),
    e("admin.type.text", "نص", "Texte"),
    e("admin.type.image", "صورة", "Image"),
    e("admin.value.ar", "النص بالعربية", "Texte en arabe"),
    e("admin.value.fr", "النص بالفرنسية", "Texte en français"),
    e("admin.value.url", "رابط الصورة", "URL de l'image"),
    e("admin.upload", "رفع صورة", "Téléverser une image"),
    e("admin.required", "الحقول الإجبارية ناقصة", "Champs obligatoires manquants"),
];

/// Look up a dictionary entry by key.
pub fn entry(key: &str) -> Option<&'static DictionaryEntry> {
    DICTIONARY.iter().find(|entry| entry.key == key)
}

/// Translate a key; unknown keys are returned unchanged.
pub fn translate(key: &str, locale: Locale) -> &str {
    match entry(key) {
        Some(entry) => entry.get(locale),
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_entry_has_both_locales() {
        for entry in DICTIONARY {
            for locale in Locale::all() {
                assert!(
                    !entry.get(locale).trim().is_empty(),
                    "missing {} for {}",
                    locale,
                    entry.key
                );
            }
        }
    }

    #[test]
    fn keys_are_unique() {
        let mut seen = HashSet::new();
        for entry in DICTIONARY {
            assert!(seen.insert(entry.key), "duplicate key {}", entry.key);
        }
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(translate("nav.unknown", Locale::Fr), "nav.unknown");
        assert_eq!(translate("nav.home", Locale::Fr), "Accueil");
        assert_eq!(translate("nav.home", Locale::Ar), "الرئيسية");
    }
}
