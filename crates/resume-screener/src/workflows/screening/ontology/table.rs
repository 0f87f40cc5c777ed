//! Built-in canonical skill table. Each entry lists the canonical name followed by the
//! spelling, abbreviation and Arabic-script variants that resolve to it.

pub(super) const BUILTIN_SKILLS: &[(&str, &[&str])] = &[
    // languages
    ("python", &["py", "بايثون", "بيثون"]),
    ("java", &["جافا", "جاڤا"]),
    (
        "javascript",
        &["js", "ecmascript", "جافا سكريبت", "جافاسكريبت"],
    ),
    ("typescript", &["ts", "تايب سكريبت"]),
    ("c++", &["cpp", "سي بلس بلس", "سي++"]),
    ("c#", &["csharp", "سي شارب", "سي#"]),
    ("go", &["golang", "لغة جو"]),
    ("rust", &["رست"]),
    ("ruby", &["روبي"]),
    ("php", &["بي اتش بي", "بي إتش بي"]),
    ("swift", &["سويفت"]),
    ("kotlin", &["كوتلن"]),
    ("scala", &[]),
    ("perl", &[]),
    ("shell", &["shell scripting"]),
    ("bash", &[]),
    ("powershell", &[]),
    ("vba", &[]),
    ("sql", &["إس كيو إل", "لغة الاستعلام"]),
    // frontend
    ("html", &["html5", "اتش تي ام ال"]),
    ("css", &["css3", "سي إس إس"]),
    ("sass", &["scss"]),
    ("react", &["reactjs", "react.js", "ريأكت", "ريآكت"]),
    ("angular", &["angularjs", "angular.js", "أنجولار", "أنغولار"]),
    ("vue", &["vuejs", "vue.js", "فيو", "ڤيو"]),
    ("svelte", &[]),
    ("jquery", &[]),
    ("bootstrap", &[]),
    ("tailwind", &["tailwindcss"]),
    ("webpack", &[]),
    ("vite", &[]),
    ("next.js", &["nextjs"]),
    ("redux", &[]),
    // backend
    ("node.js", &["nodejs", "node", "نود جي إس", "نود"]),
    ("express", &["expressjs", "express.js"]),
    ("django", &["جانجو", "دجانجو"]),
    ("flask", &["فلاسك"]),
    ("fastapi", &[]),
    ("spring boot", &["springboot", "spring", "سبرينج بوت"]),
    (".net", &["dotnet", "asp.net", ".net core"]),
    ("laravel", &[]),
    ("rails", &["ruby on rails"]),
    ("nestjs", &[]),
    ("graphql", &[]),
    ("rest", &["restful", "rest api", "restful api"]),
    ("microservices", &["microservice"]),
    // data stores
    ("mysql", &["ماي إس كيو إل"]),
    ("postgresql", &["postgres", "psql", "بوستجر", "بوستغر"]),
    ("mongodb", &["mongo", "مونجو دي بي", "مونغو"]),
    ("redis", &["ريديس"]),
    ("oracle", &["أوراكل", "اوراكل"]),
    ("sqlite", &[]),
    ("dynamodb", &[]),
    ("cassandra", &[]),
    ("elasticsearch", &["إلاستك سيرش"]),
    ("sql server", &["mssql", "sqlserver"]),
    ("firebase", &[]),
    // cloud and devops
    ("aws", &["amazon web services", "خدمات أمازون"]),
    ("azure", &["microsoft azure", "أزور", "مايكروسوفت أزور"]),
    ("gcp", &["google cloud", "google cloud platform", "جوجل كلاود"]),
    ("docker", &["دوكر"]),
    ("kubernetes", &["k8s", "كوبرنيتس", "كوبيرنيتس"]),
    ("jenkins", &["جينكينز"]),
    ("terraform", &["تيرافورم"]),
    ("ansible", &["أنسيبل"]),
    ("git", &["github", "gitlab", "bitbucket", "جيت", "جيت هاب"]),
    ("linux", &["unix", "ubuntu", "centos", "debian", "لينكس", "لينوكس"]),
    ("ci/cd", &["cicd", "continuous integration", "تكامل مستمر", "نشر مستمر"]),
    // data and machine learning
    ("pandas", &[]),
    ("numpy", &[]),
    ("scipy", &[]),
    ("matplotlib", &[]),
    ("tensorflow", &["تنسرفلو", "تنسور فلو"]),
    ("pytorch", &["بايتورش", "باي تورش"]),
    ("keras", &[]),
    ("scikit-learn", &["sklearn", "scikit learn"]),
    ("machine learning", &["ml", "تعلم الآلة", "تعلم آلي"]),
    ("deep learning", &["تعلم عميق", "التعلم العميق"]),
    ("ai", &["artificial intelligence", "ذكاء اصطناعي"]),
    ("nlp", &["natural language processing", "معالجة اللغة الطبيعية"]),
    ("computer vision", &["رؤية الحاسوب", "رؤية حاسوبية"]),
    ("data science", &["علم البيانات"]),
    ("big data", &[]),
    ("hadoop", &[]),
    ("spark", &["pyspark", "apache spark"]),
    ("airflow", &[]),
    ("kafka", &["apache kafka"]),
    ("power bi", &["powerbi", "باور بي آي"]),
    ("tableau", &["تابلو"]),
    ("excel", &["advanced excel", "اكسل", "إكسل"]),
    // mobile
    ("android", &["أندرويد", "اندرويد"]),
    ("ios", &["آي أو إس"]),
    ("react native", &["ريأكت نيتف"]),
    ("flutter", &["فلاتر"]),
    // testing
    ("selenium", &["سيلينيوم"]),
    ("pytest", &[]),
    ("junit", &[]),
    ("jest", &[]),
    ("cypress", &[]),
    ("testing", &["qa", "quality assurance", "اختبار", "ضمان الجودة"]),
    ("tdd", &["test driven development"]),
    // embedded
    ("embedded systems", &["embedded", "أنظمة مدمجة", "نظام مدمج"]),
    ("fpga", &["مصفوفة البوابات"]),
    ("vhdl", &[]),
    ("verilog", &["فيريلوج"]),
    ("rtos", &["real-time os"]),
    ("arduino", &["اردوينو", "أردوينو"]),
    // networking and security
    ("networking", &["الشبكات", "شبكات"]),
    ("tcp/ip", &["تي سي بي"]),
    ("cybersecurity", &["security", "أمن سيبراني", "أمن المعلومات"]),
    ("penetration testing", &["pen test", "pentest", "اختبار الاختراق"]),
    ("siem", &[]),
    // design
    ("ui/ux", &["ui", "ux", "تصميم واجهة", "تجربة المستخدم"]),
    ("figma", &["فيجما"]),
    ("photoshop", &["فوتوشوب"]),
    ("graphic design", &["تصميم جرافيك"]),
    // delivery and business
    ("agile", &["اجايل", "منهجية رشيقة"]),
    ("scrum", &["سكرم", "سكروم"]),
    ("jira", &["جيرا"]),
    ("project management", &["pmp", "إدارة المشاريع"]),
    ("accounting", &["محاسبة"]),
    ("financial analysis", &["تحليل مالي"]),
    ("digital marketing", &["تسويق رقمي", "تسويق إلكتروني"]),
    ("seo", &["search engine optimization", "تحسين محركات البحث"]),
    ("sales", &["مبيعات"]),
    ("crm", &["إدارة علاقات العملاء"]),
    // soft skills
    ("communication", &["مهارات التواصل"]),
    ("leadership", &["قيادة", "مهارات قيادية"]),
    ("teamwork", &["team work", "collaboration", "عمل جماعي"]),
    ("problem solving", &["حل المشكلات", "حل المشاكل"]),
    ("time management", &["إدارة الوقت"]),
];
