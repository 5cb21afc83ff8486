use super::{
    AboutPage, CallToAction, FaqEntry, FaqPage, Feature, Hero, HomePage, NavLink, Navigation,
};

const START_ASSESSMENT: NavLink = NavLink {
    label: "Start Assessment",
    href: "/assessment",
};

pub fn navigation() -> Navigation {
    Navigation {
        brand: NavLink {
            label: "Diabeat",
            href: "/",
        },
        links: vec![
            NavLink {
                label: "Home",
                href: "/",
            },
            NavLink {
                label: "About",
                href: "/about",
            },
            NavLink {
                label: "FAQ",
                href: "/faq",
            },
        ],
        primary_action: START_ASSESSMENT,
    }
}

pub fn home() -> HomePage {
    HomePage {
        hero: Hero {
            title: "Diabeat",
            tagline: "AI-powered diabetes screening for everyone. Get personalized insights about your diabetes risk in just 3 minutes.",
            primary_action: START_ASSESSMENT,
            secondary_action: NavLink {
                label: "Learn More",
                href: "/about",
            },
            highlights: vec!["Free & Anonymous", "Takes 3 minutes", "Clinically validated"],
        },
        features_heading: "Why Choose Diabeat?",
        features_intro: "Our AI-powered assessment combines the latest research with personalized insights to help you understand your diabetes risk.",
        features: vec![
            Feature {
                title: "Quick & Easy",
                body: "Complete assessment in under 3 minutes with our streamlined questionnaire.",
            },
            Feature {
                title: "Clinically Validated",
                body: "Based on established medical guidelines and research studies.",
            },
            Feature {
                title: "Personalized",
                body: "Get tailored recommendations based on your unique health profile.",
            },
            Feature {
                title: "Privacy First",
                body: "Your data is anonymous and secure. We never store personal information.",
            },
        ],
        call_to_action: CallToAction {
            heading: "Ready to Check Your Risk?",
            body: "Take the first step towards better health. Our assessment is quick, free, and provides valuable insights.",
            action: NavLink {
                label: "Start Your Assessment Now",
                href: "/assessment",
            },
        },
    }
}

pub fn about() -> AboutPage {
    AboutPage {
        title: "About Diabeat",
        intro: "Empowering individuals with AI-powered diabetes risk assessment tools for better health outcomes and preventive care.",
        mission: Feature {
            title: "Our Mission",
            body: "Diabetes affects millions of people worldwide, yet many cases could be prevented with early detection and lifestyle changes. Diabeat was created to make diabetes risk assessment accessible, accurate, and actionable for everyone. Our AI-powered tool combines the latest medical research with personalized insights to help individuals understand their risk and take proactive steps toward better health.",
        },
        pillars: vec![
            Feature {
                title: "Evidence-Based Assessment",
                body: "Our assessment is based on established medical guidelines and validated risk factors recognized by leading health organizations.",
            },
            Feature {
                title: "Privacy & Security",
                body: "Your health information is completely anonymous and secure. We never store personal data or share information with third parties.",
            },
            Feature {
                title: "Personalized Insights",
                body: "Receive tailored recommendations based on your unique health profile and risk factors to help you make informed decisions.",
            },
            Feature {
                title: "Accessible Healthcare",
                body: "Making diabetes risk assessment available to everyone, regardless of location or healthcare access, to promote preventive care.",
            },
        ],
        disclaimer: Feature {
            title: "Important Medical Disclaimer",
            body: "Diabeat is designed for informational and educational purposes only. This tool is not intended to diagnose, treat, cure, or prevent any disease, nor should it be used as a substitute for professional medical advice, diagnosis, or treatment. Always consult with qualified healthcare professionals regarding any health concerns or before making any decisions related to your health or treatment. If you have symptoms or concerns about diabetes, please seek immediate medical attention.",
        },
    }
}

pub fn faq() -> FaqPage {
    FaqPage {
        title: "Frequently Asked Questions",
        intro: "Find answers to common questions about Diabeat and diabetes risk assessment.",
        entries: vec![
            FaqEntry {
                question: "How accurate is the Diabeat risk assessment?",
                answer: "Our assessment is based on established medical guidelines and validated risk factors. However, it's designed as a screening tool and should not replace professional medical evaluation. The accuracy depends on the honesty and completeness of your responses.",
            },
            FaqEntry {
                question: "Is my personal information secure?",
                answer: "Yes, absolutely. Diabeat operates on a completely anonymous basis. We don't collect, store, or share any personal identifying information. Your responses are processed locally and are not linked to your identity in any way.",
            },
            FaqEntry {
                question: "How long does the assessment take?",
                answer: "The assessment typically takes 3-5 minutes to complete. It consists of 5 steps covering basic information, physical measurements, health metrics, lifestyle habits, and additional risk factors.",
            },
            FaqEntry {
                question: "What should I do if I receive a high-risk result?",
                answer: "If you receive a high-risk result, we strongly recommend consulting with a healthcare professional for proper evaluation and testing. Early detection and intervention can significantly reduce the risk of developing diabetes.",
            },
            FaqEntry {
                question: "Can I retake the assessment?",
                answer: "Yes, you can retake the assessment at any time. This might be useful if your health status, lifestyle, or other factors change over time. We recommend retaking it periodically to monitor changes in your risk profile.",
            },
            FaqEntry {
                question: "Is this assessment suitable for all ages?",
                answer: "The assessment is designed for adults aged 18 and older. Diabetes risk factors and assessment criteria can be different for children and adolescents, so we recommend consulting with a pediatric healthcare provider for younger individuals.",
            },
            FaqEntry {
                question: "What risk factors does the assessment consider?",
                answer: "Our assessment evaluates multiple risk factors including age, gender, BMI (calculated from height and weight), blood glucose levels, blood pressure, smoking status, physical activity level, sleep quality, and family history of diabetes.",
            },
            FaqEntry {
                question: "Do I need to know my exact glucose levels?",
                answer: "While knowing your exact glucose levels is helpful, the assessment provides options for different ranges and includes an 'I don't know' option. However, for the most accurate assessment, we recommend getting tested if you haven't had recent blood work.",
            },
            FaqEntry {
                question: "How often should I check my diabetes risk?",
                answer: "We recommend reassessing your diabetes risk annually, or more frequently if you experience significant changes in weight, lifestyle, or health status. Regular monitoring helps track changes in your risk profile over time.",
            },
            FaqEntry {
                question: "Is Diabeat a medical device or diagnostic tool?",
                answer: "No, Diabeat is not a medical device and does not provide medical diagnoses. It's an educational and informational tool designed to help you understand potential risk factors. Always consult healthcare professionals for medical advice and diagnosis.",
            },
        ],
    }
}
