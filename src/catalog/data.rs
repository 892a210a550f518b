//! The bundled catalog tables.
//!
//! One flat ordered list of sources plus the category membership lists.
//! The order of [`SOURCES`] is the catalog order used everywhere; the order
//! of [`CATEGORIES`] is the section display order. Categories overlap: a
//! business daily is also a national daily, a few regional papers appear
//! both under Local News and under their division.

use super::{Category, SourceRecord};

const fn src(
    id: &'static str,
    name: &'static str,
    website_url: &'static str,
    logo_url: &'static str,
) -> SourceRecord {
    SourceRecord {
        id,
        name,
        website_url,
        logo_url,
    }
}

/// All catalog records, in catalog order.
pub const SOURCES: &[SourceRecord] = &[
    // -- National dailies --
    src("prothom-alo", "Prothom Alo", "https://www.prothomalo.com", "https://www.prothomalo.com/favicon.ico"),
    src("kaler-kantho", "Kaler Kantho", "https://www.kalerkantho.com", "https://www.kalerkantho.com/favicon.ico"),
    src("jugantor", "Jugantor", "https://www.jugantor.com", "https://www.jugantor.com/favicon.ico"),
    src("ittefaq", "The Daily Ittefaq", "https://www.ittefaq.com.bd", "https://www.ittefaq.com.bd/favicon.ico"),
    src("samakal", "Samakal", "https://samakal.com", "https://samakal.com/favicon.ico"),
    src("janakantha", "Dainik Janakantha", "https://www.dailyjanakantha.com", "https://www.dailyjanakantha.com/favicon.ico"),
    src("inqilab", "Dainik Inqilab", "https://dailyinqilab.com", "https://dailyinqilab.com/favicon.ico"),
    src("naya-diganta", "Daily Naya Diganta", "https://www.dailynayadiganta.com", "https://www.dailynayadiganta.com/favicon.ico"),
    src("manab-zamin", "Manab Zamin", "https://mzamin.com", "https://mzamin.com/favicon.ico"),
    src("bhorer-kagoj", "Bhorer Kagoj", "https://www.bhorerkagoj.com", "https://www.bhorerkagoj.com/favicon.ico"),
    src("amader-shomoy", "Amader Shomoy", "https://www.dainikamadershomoy.com", "https://www.dainikamadershomoy.com/favicon.ico"),
    src("alokito-bangladesh", "Alokito Bangladesh", "https://www.alokitobangladesh.com", "https://www.alokitobangladesh.com/favicon.ico"),
    src("desh-rupantor", "Desh Rupantor", "https://www.deshrupantor.com", "https://www.deshrupantor.com/favicon.ico"),
    src("ajker-patrika", "Ajker Patrika", "https://www.ajkerpatrika.com", "https://www.ajkerpatrika.com/favicon.ico"),
    src("bonik-barta", "Bonik Barta", "https://bonikbarta.net", "https://bonikbarta.net/favicon.ico"),
    src("protidiner-sangbad", "Protidiner Sangbad", "https://www.protidinersangbad.com", "https://www.protidinersangbad.com/favicon.ico"),
    // -- ePapers --
    src("prothom-alo-epaper", "Prothom Alo ePaper", "https://epaper.prothomalo.com", "https://epaper.prothomalo.com/favicon.ico"),
    src("ittefaq-epaper", "Ittefaq ePaper", "https://epaper.ittefaq.com.bd", "https://epaper.ittefaq.com.bd/favicon.ico"),
    src("jugantor-epaper", "Jugantor ePaper", "https://epaper.jugantor.com", "https://epaper.jugantor.com/favicon.ico"),
    src("samakal-epaper", "Samakal ePaper", "https://epaper.samakal.com", "https://epaper.samakal.com/favicon.ico"),
    src("kaler-kantho-epaper", "Kaler Kantho ePaper", "https://epaper.kalerkantho.com", "https://epaper.kalerkantho.com/favicon.ico"),
    src("observer-epaper", "Observer ePaper", "https://epaper.observerbd.com", "https://epaper.observerbd.com/favicon.ico"),
    // -- Online portals --
    src("bdnews24", "bdnews24.com", "https://bangla.bdnews24.com", "https://bangla.bdnews24.com/favicon.ico"),
    src("banglanews24", "Banglanews24", "https://www.banglanews24.com", "https://www.banglanews24.com/favicon.ico"),
    src("jagonews24", "Jago News 24", "https://www.jagonews24.com", "https://www.jagonews24.com/favicon.ico"),
    src("risingbd", "Rising BD", "https://www.risingbd.com", "https://www.risingbd.com/favicon.ico"),
    src("bangla-tribune", "Bangla Tribune", "https://www.banglatribune.com", "https://www.banglatribune.com/favicon.ico"),
    src("dhaka-post", "Dhaka Post", "https://www.dhakapost.com", "https://www.dhakapost.com/favicon.ico"),
    src("barta24", "Barta24", "https://barta24.com", "https://barta24.com/favicon.ico"),
    src("sarabangla", "Sarabangla", "https://sarabangla.net", "https://sarabangla.net/favicon.ico"),
    src("bd24live", "BD24Live", "https://www.bd24live.com", "https://www.bd24live.com/favicon.ico"),
    src("dhakatimes24", "Dhaka Times 24", "https://www.dhakatimes24.com", "https://www.dhakatimes24.com/favicon.ico"),
    src("daily-bangladesh", "Daily Bangladesh", "https://www.daily-bangladesh.com", "https://www.daily-bangladesh.com/favicon.ico"),
    // -- TV channels --
    src("somoy-tv", "Somoy TV", "https://www.somoynews.tv", "https://www.somoynews.tv/favicon.ico"),
    src("jamuna-tv", "Jamuna TV", "https://jamuna.tv", "https://jamuna.tv/favicon.ico"),
    src("channel-i", "Channel i", "https://www.channelionline.com", "https://www.channelionline.com/favicon.ico"),
    src("atn-bangla", "ATN Bangla", "https://www.atnbangla.tv", "https://www.atnbangla.tv/favicon.ico"),
    src("ntv", "NTV", "https://www.ntvbd.com", "https://www.ntvbd.com/favicon.ico"),
    src("rtv", "RTV", "https://www.rtvonline.com", "https://www.rtvonline.com/favicon.ico"),
    src("ekattor-tv", "Ekattor TV", "https://ekattor.tv", "https://ekattor.tv/favicon.ico"),
    src("independent-tv", "Independent Television", "https://www.itvbd.com", "https://www.itvbd.com/favicon.ico"),
    src("channel-24", "Channel 24", "https://www.channel24bd.tv", "https://www.channel24bd.tv/favicon.ico"),
    src("dbc-news", "DBC News", "https://dbcnews.tv", "https://dbcnews.tv/favicon.ico"),
    src("news24-tv", "News24", "https://www.news24bd.tv", "https://www.news24bd.tv/favicon.ico"),
    // -- English newspapers --
    src("daily-star", "The Daily Star", "https://www.thedailystar.net", "https://www.thedailystar.net/favicon.ico"),
    src("dhaka-tribune", "Dhaka Tribune", "https://www.dhakatribune.com", "https://www.dhakatribune.com/favicon.ico"),
    src("new-age", "New Age", "https://www.newagebd.net", "https://www.newagebd.net/favicon.ico"),
    src("financial-express", "The Financial Express", "https://thefinancialexpress.com.bd", "https://thefinancialexpress.com.bd/favicon.ico"),
    src("daily-sun", "Daily Sun", "https://www.daily-sun.com", "https://www.daily-sun.com/favicon.ico"),
    src("daily-observer", "The Daily Observer", "https://www.observerbd.com", "https://www.observerbd.com/favicon.ico"),
    src("business-standard", "The Business Standard", "https://www.tbsnews.net", "https://www.tbsnews.net/favicon.ico"),
    src("bangladesh-post", "Bangladesh Post", "https://bangladeshpost.net", "https://bangladeshpost.net/favicon.ico"),
    // -- Business --
    src("share-biz", "Share Biz", "https://sharebiz.net", "https://sharebiz.net/favicon.ico"),
    src("arthosuchak", "ArthoSuchak", "https://www.arthosuchak.com", "https://www.arthosuchak.com/favicon.ico"),
    src("business-post", "The Business Post", "https://businesspostbd.com", "https://businesspostbd.com/favicon.ico"),
    // -- International (Bangla) --
    src("bbc-bangla", "BBC Bangla", "https://www.bbc.com/bengali", "https://www.bbc.com/favicon.ico"),
    src("voa-bangla", "VOA Bangla", "https://www.voabangla.com", "https://www.voabangla.com/favicon.ico"),
    src("dw-bangla", "DW Bangla", "https://www.dw.com/bn", "https://www.dw.com/favicon.ico"),
    src("anandabazar", "Anandabazar Patrika", "https://www.anandabazar.com", "https://www.anandabazar.com/favicon.ico"),
    src("ei-samay", "Ei Samay", "https://eisamay.com", "https://eisamay.com/favicon.ico"),
    src("bartaman", "Bartaman Patrika", "https://bartamanpatrika.com", "https://bartamanpatrika.com/favicon.ico"),
    // -- International (world) --
    src("bbc-news", "BBC News", "https://www.bbc.com/news", "https://www.bbc.com/favicon.ico"),
    src("cnn", "CNN", "https://edition.cnn.com", "https://edition.cnn.com/favicon.ico"),
    src("al-jazeera", "Al Jazeera", "https://www.aljazeera.com", "https://www.aljazeera.com/favicon.ico"),
    src("reuters", "Reuters", "https://www.reuters.com", "https://www.reuters.com/favicon.ico"),
    src("the-guardian", "The Guardian", "https://www.theguardian.com", "https://www.theguardian.com/favicon.ico"),
    src("nytimes", "The New York Times", "https://www.nytimes.com", "https://www.nytimes.com/favicon.ico"),
    // -- Sports --
    src("bdcrictime", "BDCricTime", "https://www.bdcrictime.com", "https://www.bdcrictime.com/favicon.ico"),
    src("cricfrenzy", "CricFrenzy", "https://cricfrenzy.com", "https://cricfrenzy.com/favicon.ico"),
    src("espncricinfo", "ESPNcricinfo", "https://www.espncricinfo.com", "https://www.espncricinfo.com/favicon.ico"),
    // -- Technology --
    src("techshohor", "TechShohor", "https://techshohor.com", "https://techshohor.com/favicon.ico"),
    src("techzoom", "TechZoom", "https://techzoom.tv", "https://techzoom.tv/favicon.ico"),
    src("digibangla", "Digi Bangla", "https://digibanglatech.news", "https://digibanglatech.news/favicon.ico"),
    src("banglatech24", "BanglaTech24", "https://banglatech24.com", "https://banglatech24.com/favicon.ico"),
    // -- Education --
    src("dainik-shiksha", "Dainik Shiksha", "https://www.dainikshiksha.com", "https://www.dainikshiksha.com/favicon.ico"),
    src("edu-daily-24", "Edu Daily 24", "https://edudaily24.com", "https://edudaily24.com/favicon.ico"),
    src("campuslive24", "CampusLive24", "https://campuslive24.com", "https://campuslive24.com/favicon.ico"),
    src("lekhapora-bd", "LekhaporaBD", "https://lekhaporabd.net", "https://lekhaporabd.net/favicon.ico"),
    // -- Job sites --
    src("bdjobs", "BDJobs", "https://www.bdjobs.com", "https://www.bdjobs.com/favicon.ico"),
    src("skill-jobs", "Skill Jobs", "https://skill.jobs", "https://skill.jobs/favicon.ico"),
    src("chakri-com", "Chakri.com", "https://www.chakri.com", "https://www.chakri.com/favicon.ico"),
    src("alljobs-teletalk", "AllJobs Teletalk", "https://alljobs.teletalk.com.bd", "https://alljobs.teletalk.com.bd/favicon.ico"),
    // -- Magazines --
    src("shaptahik", "Shaptahik", "https://www.shaptahik.com", "https://www.shaptahik.com/favicon.ico"),
    src("kishor-alo", "Kishor Alo", "https://www.kishoralo.com", "https://www.kishoralo.com/favicon.ico"),
    src("canvas-magazine", "Canvas", "https://www.canvasmagazine.com.bd", "https://www.canvasmagazine.com.bd/favicon.ico"),
    src("roar-bangla", "Roar Bangla", "https://roar.media/bangla", "https://roar.media/favicon.ico"),
    // -- Blogs --
    src("somewhereinblog", "Somewhere in... Blog", "https://www.somewhereinblog.net", "https://www.somewhereinblog.net/favicon.ico"),
    src("sachalayatan", "Sachalayatan", "https://www.sachalayatan.com", "https://www.sachalayatan.com/favicon.ico"),
    // -- Regional papers --
    src("dainik-azadi", "Dainik Azadi", "https://dainikazadi.net", "https://dainikazadi.net/favicon.ico"),
    src("purbokone", "Dainik Purbokone", "https://dainikpurbokone.net", "https://dainikpurbokone.net/favicon.ico"),
    src("suprobhat", "Suprobhat Bangladesh", "https://suprobhat.com", "https://suprobhat.com/favicon.ico"),
    src("sylheter-dak", "Sylheter Dak", "https://sylheterdakbd.com", "https://sylheterdakbd.com/favicon.ico"),
    src("dainik-jalalabad", "Dainik Jalalabad", "https://dailyjalalabad.com", "https://dailyjalalabad.com/favicon.ico"),
    src("sylhet-mirror", "Sylhet Mirror", "https://sylhetmirror.com", "https://sylhetmirror.com/favicon.ico"),
    src("purbanchal", "Dainik Purbanchal", "https://purbanchal.com", "https://purbanchal.com/favicon.ico"),
    src("dainik-probaho", "Dainik Probaho", "https://dainikprobaho.com", "https://dainikprobaho.com/favicon.ico"),
    src("gramer-kagoj", "Gramer Kagoj", "https://gramerkagoj.com", "https://gramerkagoj.com/favicon.ico"),
    src("sonali-sangbad", "Sonali Sangbad", "https://sonalisangbad.com", "https://sonalisangbad.com/favicon.ico"),
    src("sonar-desh", "Dainik Sonar Desh", "https://sonardesh24.com", "https://sonardesh24.com/favicon.ico"),
    src("karatoa", "Daily Karatoa", "https://www.karatoa.com.bd", "https://www.karatoa.com.bd/favicon.ico"),
    src("narayanganj-times", "Narayanganj Times", "https://narayanganjtimes.com", "https://narayanganjtimes.com/favicon.ico"),
    src("gazipur-kontho", "Gazipur Kontho", "https://gazipurkontho.com", "https://gazipurkontho.com/favicon.ico"),
    src("ajker-barishal", "Ajker Barishal", "https://ajkerbarisal.com", "https://ajkerbarisal.com/favicon.ico"),
    src("barishal-pratidin", "Barishal Pratidin", "https://barisalpratidin.com", "https://barisalpratidin.com/favicon.ico"),
    src("dainik-jahan", "Dainik Jahan", "https://dainikjahan.com", "https://dainikjahan.com/favicon.ico"),
    src("mymensingh-pratidin", "Mymensingh Pratidin", "https://mymensinghpratidin.com", "https://mymensinghpratidin.com/favicon.ico"),
];

/// Category membership lists, in section display order.
pub const CATEGORIES: &[Category] = &[
    Category {
        title: "National Dailies",
        members: &[
            "prothom-alo",
            "kaler-kantho",
            "jugantor",
            "ittefaq",
            "samakal",
            "janakantha",
            "inqilab",
            "naya-diganta",
            "manab-zamin",
            "bhorer-kagoj",
            "amader-shomoy",
            "alokito-bangladesh",
            "desh-rupantor",
            "ajker-patrika",
            "bonik-barta",
            "protidiner-sangbad",
        ],
    },
    Category {
        title: "ePapers",
        members: &[
            "prothom-alo-epaper",
            "ittefaq-epaper",
            "jugantor-epaper",
            "samakal-epaper",
            "kaler-kantho-epaper",
            "observer-epaper",
        ],
    },
    Category {
        title: "Online Portals",
        members: &[
            "bdnews24",
            "banglanews24",
            "jagonews24",
            "risingbd",
            "bangla-tribune",
            "dhaka-post",
            "barta24",
            "sarabangla",
            "bd24live",
            "dhakatimes24",
            "daily-bangladesh",
        ],
    },
    Category {
        title: "TV Channels",
        members: &[
            "somoy-tv",
            "jamuna-tv",
            "channel-i",
            "atn-bangla",
            "ntv",
            "rtv",
            "ekattor-tv",
            "independent-tv",
            "channel-24",
            "dbc-news",
            "news24-tv",
        ],
    },
    Category {
        title: "English Newspapers",
        members: &[
            "daily-star",
            "dhaka-tribune",
            "new-age",
            "financial-express",
            "daily-sun",
            "daily-observer",
            "business-standard",
            "bangladesh-post",
        ],
    },
    Category {
        title: "Business News",
        members: &[
            "bonik-barta",
            "financial-express",
            "business-standard",
            "share-biz",
            "arthosuchak",
            "business-post",
        ],
    },
    Category {
        title: "International (Bangla)",
        members: &[
            "bbc-bangla",
            "voa-bangla",
            "dw-bangla",
            "anandabazar",
            "ei-samay",
            "bartaman",
        ],
    },
    Category {
        title: "International (World)",
        members: &[
            "bbc-news",
            "cnn",
            "al-jazeera",
            "reuters",
            "the-guardian",
            "nytimes",
        ],
    },
    Category {
        title: "Sports",
        members: &["bdcrictime", "cricfrenzy", "espncricinfo"],
    },
    Category {
        title: "Technology",
        members: &["techshohor", "techzoom", "digibangla", "banglatech24"],
    },
    Category {
        title: "Education",
        members: &[
            "dainik-shiksha",
            "edu-daily-24",
            "campuslive24",
            "lekhapora-bd",
        ],
    },
    Category {
        title: "Job Sites",
        members: &["bdjobs", "skill-jobs", "chakri-com", "alljobs-teletalk"],
    },
    Category {
        title: "Magazines",
        members: &[
            "shaptahik",
            "kishor-alo",
            "canvas-magazine",
            "roar-bangla",
        ],
    },
    Category {
        title: "Blogs",
        members: &["somewhereinblog", "sachalayatan", "roar-bangla"],
    },
    Category {
        title: "Local News",
        members: &[
            "dainik-azadi",
            "sylheter-dak",
            "purbanchal",
            "karatoa",
            "narayanganj-times",
            "ajker-barishal",
            "dainik-jahan",
        ],
    },
    Category {
        title: "Dhaka Division",
        members: &["narayanganj-times", "gazipur-kontho"],
    },
    Category {
        title: "Chattogram Division",
        members: &["dainik-azadi", "purbokone", "suprobhat"],
    },
    Category {
        title: "Rajshahi Division",
        members: &["sonali-sangbad", "sonar-desh", "karatoa"],
    },
    Category {
        title: "Khulna Division",
        members: &["purbanchal", "dainik-probaho", "gramer-kagoj"],
    },
    Category {
        title: "Sylhet Division",
        members: &["sylheter-dak", "dainik-jalalabad", "sylhet-mirror"],
    },
    Category {
        title: "Barishal Division",
        members: &["ajker-barishal", "barishal-pratidin"],
    },
    Category {
        title: "Mymensingh Division",
        members: &["dainik-jahan", "mymensingh-pratidin"],
    },
];
