use std::collections::HashMap;
use std::sync::OnceLock;

const ARABIC_JOB_TITLES: &[(&str, &str)] = &[
    ("مهندس برمجيات", "Software Engineer"),
    ("مطور برمجيات", "Software Developer"),
    ("مطور ويب", "Web Developer"),
    ("مطور تطبيقات", "Application Developer"),
    ("مطور فول ستاك", "Full Stack Developer"),
    ("مطور واجهات أمامية", "Frontend Developer"),
    ("مطور واجهات خلفية", "Backend Developer"),
    ("مهندس برمجيات أول", "Senior Software Engineer"),
    ("مهندس برمجيات رئيسي", "Lead Software Engineer"),
    ("عالم بيانات", "Data Scientist"),
    ("مهندس تعلم آلي", "Machine Learning Engineer"),
    ("مهندس ذكاء اصطناعي", "AI Engineer"),
    ("محلل بيانات", "Data Analyst"),
    ("مهندس بيانات", "Data Engineer"),
    ("محلل أمن سيبراني", "Security Analyst"),
    ("مهندس أمن المعلومات", "Information Security Engineer"),
    ("مختبر اختراق", "Penetration Tester"),
    ("مهندس أنظمة مدمجة", "Embedded Systems Engineer"),
    ("مهندس إلكترونيات", "Electronics Engineer"),
    ("مهندس سحابة", "Cloud Engineer"),
    ("مهندس بنية تحتية", "Infrastructure Engineer"),
    ("مدير أنظمة", "System Administrator"),
    ("مطور أندرويد", "Android Developer"),
    ("مطور تطبيقات جوال", "Mobile Developer"),
    ("مدير مشروع", "Project Manager"),
    ("مدير منتج", "Product Manager"),
    ("مهندس ضمان الجودة", "QA Engineer"),
    ("مختبر برمجيات", "Software Tester"),
    ("مدير قواعد بيانات", "Database Administrator"),
    ("مهندس شبكات", "Network Engineer"),
    ("محلل أعمال", "Business Analyst"),
    ("محلل نظم", "Systems Analyst"),
    ("مدير تسويق", "Marketing Manager"),
    ("مدير مبيعات", "Sales Manager"),
    ("محاسب", "Accountant"),
    ("محلل مالي", "Financial Analyst"),
    ("مدير مالي", "Finance Manager"),
    ("مصمم جرافيك", "Graphic Designer"),
    ("مصمم تجربة مستخدم", "UX Designer"),
    ("أخصائي دعم تقني", "Technical Support Specialist"),
];

fn title_index() -> &'static HashMap<&'static str, &'static str> {
    static INDEX: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    INDEX.get_or_init(|| ARABIC_JOB_TITLES.iter().copied().collect())
}

/// English equivalent of an Arabic job title. An exact match wins; otherwise the longest
/// known title contained in the phrase is used.
pub fn translate_job_title(phrase: &str) -> Option<&'static str> {
    let trimmed = phrase.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(english) = title_index().get(trimmed) {
        return Some(english);
    }

    ARABIC_JOB_TITLES
        .iter()
        .filter(|(arabic, _)| trimmed.contains(arabic))
        .max_by_key(|(arabic, _)| arabic.chars().count())
        .map(|(_, english)| *english)
}
