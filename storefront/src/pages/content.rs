use super::Section;

const AI_SERVICES: &[&str] = &[
    "האתר משתמש בשירותי בינה מלאכותית ניסיוניים לתמיכה בחוויית המשתמש.",
    "שירותים אלו אינם אוספים מידע אישי.",
    "החברה אינה אחראית לביצועים, לאיכות או לאופן השימוש בשירותים אלו.",
];

const GENDER_NOTE: &str = "הפניה בלשון זכר אך מתייחסת לשני המינים. ט.ל.ח.";

pub(super) const PRIVACY_SECTIONS: &[Section] = &[
    Section {
        number: 1,
        title: "אודותינו",
        paragraphs: &[
            "איי איי די קאן יל בע\"מ (\"החברה\", \"אנחנו\") הינה חברה המגדלת ואורזת קנאביס רפואי בהתאם לתקנות משרד הבריאות.",
            "פלטפורמה זו נועדה לספק חוויית הזמנה ותמיכה עבור בתי מרקחת בעלי רישיון לשיווק קנאביס רפואי.",
        ],
        items: &[],
    },
    Section {
        number: 2,
        title: "המידע שאנו אוספים",
        paragraphs: &["אנו שומרים מידע מינימלי הנדרש לתפעול השירות:"],
        items: &[
            "פרטי בית מרקחת: שם בית המרקחת (מידע ציבורי)",
            "מספר רישיון: מספר רישיון בית המרקחת (מידע ציבורי)",
            "פרטי קשר: מספר טלפון נייד",
            "היסטוריית הזמנות: רשימת ההזמנות שבוצעו",
            "מוצרים מועדפים: העדפות מוצרים לנוחות ההזמנה",
        ],
    },
    Section {
        number: 3,
        title: "מטרות השימוש במידע",
        paragraphs: &["אנו משתמשים במידע אך ורק למטרות הבאות:"],
        items: &[
            "עיבוד והעברת הזמנות למפיצים",
            "יצירת קשר בנוגע להזמנות",
            "שיפור חוויית ההזמנה (שמירת מועדפים)",
        ],
    },
    Section {
        number: 4,
        title: "שיתוף מידע",
        paragraphs: &[
            "פרטי ההזמנות מועברים למפיצים המשלחים לצורך ביצוע המשלוח בלבד.",
            "איננו מוכרים, משכירים או משתפים מידע אישי לצדדים שלישיים למטרות שיווקיות.",
        ],
        items: &[],
    },
    Section {
        number: 5,
        title: "אבטחת מידע",
        paragraphs: &["אנו נוקטים באמצעי אבטחה סבירים להגנה על המידע השמור במערכת."],
        items: &[],
    },
    Section {
        number: 6,
        title: "זכויות המשתמש",
        paragraphs: &["באפשרותך לבקש עיון, תיקון או מחיקת המידע השמור אודותיך בכל עת."],
        items: &[],
    },
    Section {
        number: 7,
        title: "שירותי בינה מלאכותית",
        paragraphs: AI_SERVICES,
        items: &[],
    },
    Section {
        number: 8,
        title: "שינויים במדיניות",
        paragraphs: &[
            "אנו שומרים על הזכות לעדכן מדיניות זו. שינויים יפורסמו באתר.",
            "בשימושך באתר הנך מאשר כי קראת והסכמת למדיניות פרטיות זו.",
            GENDER_NOTE,
        ],
        items: &[],
    },
];

pub(super) const TERMS_SECTIONS: &[Section] = &[
    Section {
        number: 1,
        title: "אודות השירות",
        paragraphs: &[
            "איי איי די קאן יל בע\"מ הינה חברה המגדלת ואורזת קנאביס רפואי בהתאם לתקנות משרד הבריאות והחוק הישראלי.",
            "פלטפורמה זו נועדה לספק חוויית הזמנה ותמיכה עבור בתי מרקחת בעלי רישיון לשיווק קנאביס רפואי.",
            "אנו מחויבים לאיכות, לעמידה בתקנים ולשירות מקצועי.",
        ],
        items: &[],
    },
    Section {
        number: 2,
        title: "תנאי זכאות",
        paragraphs: &[
            "השירות מיועד לבתי מרקחת בעלי רישיון תקף בלבד.",
            "השימוש באתר מהווה הצהרה כי הנך מורשה להזמין מוצרי קנאביס רפואי.",
        ],
        items: &[],
    },
    Section {
        number: 3,
        title: "אופי השירות",
        paragraphs: &[],
        items: &[
            "הפלטפורמה מספקת ממשק נוח להזמנות ומידע על מוצרים",
            "כל המוצרים מיוצרים ונארזים על ידינו בהתאם לתקני האיכות הנדרשים",
            "אנו מחויבים לעמידה בכל התקנות והחוקים הרלוונטיים",
        ],
    },
    Section {
        number: 4,
        title: "אזהרה חשובה",
        paragraphs: &[
            "המידע המוצג באתר הינו למטרות מידע כללי בלבד ואינו מהווה ייעוץ רפואי.",
            "האחריות על אופן השימוש במידע זה היא באחריות בית המרקחת בלבד.",
            "אנו ממליצים להפנות לקוחות להתייעצות עם רופא מוסמך.",
        ],
        items: &[],
    },
    Section {
        number: 5,
        title: "אחריות ואיכות",
        paragraphs: &[
            "אנו אחראים לאיכות המוצרים ולעמידה בכל התקנות הנדרשות.",
            "האחריות על התאמת המוצר לחולה הספציפי היא על הרופא המטפל ובית המרקחת המנפק.",
        ],
        items: &[],
    },
    Section {
        number: 6,
        title: "הזמנות",
        paragraphs: &[],
        items: &[
            "כל ההזמנות כפופות לזמינות המוצרים",
            "אנו שואפים לספק שירות מהיר ואמין",
            "לכל שאלה או בירור אנו כאן לעזור",
        ],
    },
    Section {
        number: 7,
        title: "שירותי בינה מלאכותית",
        paragraphs: AI_SERVICES,
        items: &[],
    },
    Section {
        number: 8,
        title: "קניין רוחני",
        paragraphs: &[
            "כל התכנים, הכלים, שיטות העבודה והטכנולוגיות באתר הם קניינה של החברה. אין להעתיק או להפיץ ללא אישור.",
        ],
        items: &[],
    },
    Section {
        number: 9,
        title: "שינויים בתנאים",
        paragraphs: &[
            "החברה רשאית לעדכן תנאים אלה. שינויים יפורסמו באתר.",
            "בשימושך באתר הנך מאשר כי קראת והסכמת לתנאי שימוש אלה.",
            GENDER_NOTE,
        ],
        items: &[],
    },
];
