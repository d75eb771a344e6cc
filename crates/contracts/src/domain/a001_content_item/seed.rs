//! Default content written on first start, when nothing is stored yet.

use super::aggregate::{ContentItem, ContentItemId};
use crate::domain::common::LocalizedText;

/// Pages of the public site, in navigation order
pub const KNOWN_PAGES: [&str; 8] = [
    "home",
    "about",
    "activities",
    "publications",
    "members",
    "partners",
    "channel",
    "contact",
];

fn text(page: &str, section: &str, field: &str, label: &str, ar: &str, fr: &str) -> ContentItem {
    ContentItem::text(
        ContentItemId::seeded(page, section, field),
        page,
        section,
        field,
        label,
        LocalizedText::new(ar, fr),
    )
}

fn image(page: &str, section: &str, field: &str, label: &str, url: &str) -> ContentItem {
    ContentItem::image(
        ContentItemId::seeded(page, section, field),
        page,
        section,
        field,
        label,
        url,
    )
}

pub fn default_content() -> Vec<ContentItem> {
    vec![
        // home
        text(
            "home",
            "hero",
            "title",
            "Hero title",
            "مرحبا بكم في جمعيتنا الثقافية",
            "Bienvenue dans notre association culturelle",
        ),
        text(
            "home",
            "hero",
            "subtitle",
            "Hero subtitle",
            "فضاء للثقافة والتراث والإبداع",
            "Un espace pour la culture, le patrimoine et la création",
        ),
        image("home", "hero", "image", "Hero image", "/static/img/hero.jpg"),
        text(
            "home",
            "intro",
            "body",
            "Introduction",
            "نعمل منذ سنوات على ترقية الحياة الثقافية ودعم المواهب الشابة.",
            "Depuis des années, nous animons la vie culturelle et soutenons les jeunes talents.",
        ),
        // about
        text("about", "header", "title", "Page title", "من نحن", "Qui sommes-nous"),
        text(
            "about",
            "mission",
            "body",
            "Mission",
            "مهمتنا هي صون التراث ونشر الثقافة باللغتين العربية والفرنسية.",
            "Notre mission est de préserver le patrimoine et de diffuser la culture en arabe et en français.",
        ),
        text(
            "about",
            "history",
            "body",
            "History",
            "تأسست الجمعية على يد مجموعة من المثقفين والفنانين.",
            "L'association a été fondée par un groupe d'intellectuels et d'artistes.",
        ),
        image("about", "history", "image", "History image", "/static/img/about.jpg"),
        // activities
        text("activities", "header", "title", "Page title", "أنشطتنا", "Nos activités"),
        text(
            "activities",
            "header",
            "intro",
            "Introduction",
            "ورشات، أمسيات أدبية، معارض ولقاءات مفتوحة على الجميع.",
            "Ateliers, soirées littéraires, expositions et rencontres ouvertes à tous.",
        ),
        // publications
        text("publications", "header", "title", "Page title", "منشوراتنا", "Nos publications"),
        text(
            "publications",
            "magazine",
            "description",
            "Magazine",
            "مجلة فصلية تعنى بالأدب والفنون.",
            "Une revue trimestrielle consacrée aux lettres et aux arts.",
        ),
        image(
            "publications",
            "magazine",
            "cover",
            "Magazine cover",
            "/static/img/magazine.jpg",
        ),
        // members
        text("members", "header", "title", "Page title", "أعضاء الجمعية", "Les membres"),
        text(
            "members",
            "board",
            "intro",
            "Board",
            "يسهر المكتب التنفيذي على تسيير الجمعية.",
            "Le bureau exécutif assure la gestion de l'association.",
        ),
        // partners
        text("partners", "header", "title", "Page title", "شركاؤنا", "Nos partenaires"),
        text(
            "partners",
            "list",
            "intro",
            "Introduction",
            "نشكر كل المؤسسات التي تدعم نشاطاتنا.",
            "Merci à toutes les institutions qui soutiennent nos activités.",
        ),
        // channel
        text("channel", "header", "title", "Page title", "القناة الثقافية", "La chaîne culturelle"),
        text(
            "channel",
            "videos",
            "intro",
            "Introduction",
            "شاهدوا تسجيلات لقاءاتنا وأمسياتنا.",
            "Retrouvez les enregistrements de nos rencontres et soirées.",
        ),
        // contact
        text("contact", "header", "title", "Page title", "اتصل بنا", "Contactez-nous"),
        text(
            "contact",
            "details",
            "address",
            "Address",
            "دار الثقافة، الشارع الرئيسي",
            "Maison de la culture, rue principale",
        ),
        text(
            "contact",
            "details",
            "email",
            "Email",
            "contact@association.org",
            "contact@association.org",
        ),
    ]
}
