// Static site copy. Plain data, no behaviour.

use crate::decorations::palette::Glyph;

pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_SECTIONS: [NavSection; 6] = [
    NavSection { id: "home", label: "Home" },
    NavSection { id: "about", label: "About" },
    NavSection { id: "services", label: "Services" },
    NavSection { id: "portfolio", label: "Portfolio" },
    NavSection { id: "blog", label: "Blog" },
    NavSection { id: "contact", label: "Contact" },
];

pub struct Feature {
    pub glyph: Glyph,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HERO_FEATURES: [Feature; 3] = [
    Feature { glyph: Glyph::Zap, title: "Automation", description: "Streamline workflows and boost productivity" },
    Feature { glyph: Glyph::Cloud, title: "SaaS Solutions", description: "Scalable software for modern businesses" },
    Feature { glyph: Glyph::Code, title: "Full-Stack Development", description: "End-to-end application development" },
];

pub struct Stat {
    pub target: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat { target: 150, suffix: "+", label: "Happy Clients" },
    Stat { target: 200, suffix: "+", label: "Projects Completed" },
    Stat { target: 99, suffix: "%", label: "Success Rate" },
];

pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: [Value; 3] = [
    Value {
        title: "Mission",
        description: "To empower businesses through innovative IT solutions that drive growth, efficiency, and digital transformation in an ever-evolving technological landscape.",
    },
    Value {
        title: "Vision",
        description: "To be the leading IT partner that businesses trust for cutting-edge SaaS solutions, automation, and full-stack development worldwide.",
    },
    Value {
        title: "Values",
        description: "Innovation, integrity, and excellence guide everything we do. We prioritize client success, embrace emerging technologies, and deliver exceptional results.",
    },
];

pub struct Skill {
    pub name: &'static str,
    pub glyph: Glyph,
    pub color: &'static str,
}

pub const SKILLS: [Skill; 21] = [
    Skill { name: "React/Next.js", glyph: Glyph::Code, color: "#2563eb" },
    Skill { name: "Node.js", glyph: Glyph::Server, color: "#16a34a" },
    Skill { name: "Python", glyph: Glyph::Cpu, color: "#ca8a04" },
    Skill { name: "Cloud Solutions", glyph: Glyph::Cloud, color: "#60a5fa" },
    Skill { name: "DevOps", glyph: Glyph::Settings, color: "#4f46e5" },
    Skill { name: "AI/ML", glyph: Glyph::Cpu, color: "#9333ea" },
    Skill { name: "Mobile Dev", glyph: Glyph::Smartphone, color: "#db2777" },
    Skill { name: "UI/UX Design", glyph: Glyph::Palette, color: "#f97316" },
    Skill { name: "MySQL", glyph: Glyph::Database, color: "#1d4ed8" },
    Skill { name: "PostgreSQL", glyph: Glyph::Database, color: "#0284c7" },
    Skill { name: "MongoDB", glyph: Glyph::Database, color: "#15803d" },
    Skill { name: "Firebase", glyph: Glyph::Database, color: "#eab308" },
    Skill { name: "AWS", glyph: Glyph::Cloud, color: "#fb923c" },
    Skill { name: "Docker", glyph: Glyph::Cloud, color: "#3b82f6" },
    Skill { name: "Figma", glyph: Glyph::Palette, color: "#f472b6" },
    Skill { name: "n8n", glyph: Glyph::Settings, color: "#22c55e" },
    Skill { name: "Zapier", glyph: Glyph::Zap, color: "#f97316" },
    Skill { name: "Jira", glyph: Glyph::Server, color: "#3b82f6" },
    Skill { name: "Trello", glyph: Glyph::Code, color: "#60a5fa" },
    Skill { name: "Slack", glyph: Glyph::Smartphone, color: "#a855f7" },
    Skill { name: "Shopify", glyph: Glyph::Zap, color: "#16a34a" },
];

pub struct Service {
    pub glyph: Glyph,
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
    /// CSS gradient stops for the icon badge.
    pub gradient: (&'static str, &'static str),
}

pub const SERVICES: [Service; 5] = [
    Service {
        glyph: Glyph::Cloud,
        title: "SaaS Solutions",
        description: "Custom software-as-a-service platforms built for scalability and performance. From concept to deployment, we create solutions that grow with your business.",
        features: ["Multi-tenant Architecture", "API Development", "Cloud Integration", "Subscription Management"],
        gradient: ("#3b82f6", "#2563eb"),
    },
    Service {
        glyph: Glyph::Zap,
        title: "Automation Workflows",
        description: "Streamline your business processes with intelligent automation. Reduce manual work, eliminate errors, and boost productivity across all departments.",
        features: ["Process Automation", "Integration Solutions", "Workflow Optimization", "Data Processing"],
        gradient: ("#a855f7", "#9333ea"),
    },
    Service {
        glyph: Glyph::Code,
        title: "Full-Stack Development",
        description: "Complete end-to-end application development using modern technologies. We build robust, scalable applications that deliver exceptional user experiences.",
        features: ["Frontend Development", "Backend Systems", "Database Design", "API Integration"],
        gradient: ("#f97316", "#ea580c"),
    },
    Service {
        glyph: Glyph::Palette,
        title: "Web Development & Design",
        description: "Beautiful, responsive websites that captivate your audience and drive conversions. We combine stunning design with powerful functionality.",
        features: ["Responsive Design", "UI/UX Optimization", "Performance Tuning", "SEO Implementation"],
        gradient: ("#22c55e", "#16a34a"),
    },
    Service {
        glyph: Glyph::Settings,
        title: "Custom IT Solutions",
        description: "Tailored technology solutions designed specifically for your unique business needs. We analyze, design, and implement solutions that fit perfectly.",
        features: ["System Integration", "Legacy Modernization", "Consulting Services", "Maintenance & Support"],
        gradient: ("#6366f1", "#4f46e5"),
    },
];

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: [&'static str; 4],
    pub results: [&'static str; 3],
}

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "LOOP: Point of Sale System with Integrated ERP System",
        category: "SaaS Solution",
        description: "A custom-built Point of Sale Software for restaurant businesses, fully automated and integrated with an ERP system. Delivered as a SaaS solution for seamless business operations.",
        image: "https://images.pexels.com/photos/267389/pexels-photo-267389.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: ["React", "Node.js", "ERP Integration", "SaaS"],
        results: ["Automated restaurant operations", "Cloud-based SaaS delivery", "Custom ERP integration"],
    },
    Project {
        title: "Muawin",
        category: "Full-Stack Application",
        description: "A regional-based file management system with multi-branch and zone support, integrated with a robust task management system. Built for a company to streamline operations across multiple locations.",
        image: "https://images.pexels.com/photos/1181671/pexels-photo-1181671.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: ["React", "Node.js", "File Management", "Task Management"],
        results: ["Centralized file management", "Multi-branch support", "Integrated task workflows"],
    },
    Project {
        title: "Slack to Google Sheets Automation",
        category: "n8n Automation",
        description: "Automated workflow using n8n to capture Slack messages and log them into Google Sheets for real-time team reporting and analytics.",
        image: "https://images.pexels.com/photos/1181675/pexels-photo-1181675.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: ["n8n", "Slack API", "Google Sheets API", "Automation"],
        results: ["Real-time message logging", "Automated reporting", "No manual data entry"],
    },
    Project {
        title: "Inventory Management Platform",
        category: "Full-Stack Solution",
        description: "A scalable inventory management platform with real-time stock tracking, supplier management, and analytics dashboard.",
        image: "https://images.pexels.com/photos/373076/pexels-photo-373076.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: ["React", "Node.js", "MongoDB", "Express"],
        results: ["Live stock updates", "Supplier integration", "Actionable analytics"],
    },
    Project {
        title: "Email Parser to CRM Automation",
        category: "n8n Automation",
        description: "n8n workflow that parses incoming emails and automatically creates or updates leads in a CRM system, saving hours of manual entry.",
        image: "https://images.pexels.com/photos/267350/pexels-photo-267350.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: ["n8n", "IMAP", "CRM API", "Automation"],
        results: ["Automated lead creation", "Zero manual input", "Faster response times"],
    },
    Project {
        title: "Social Media Scheduler Automation",
        category: "n8n Automation",
        description: "A workflow built in n8n to schedule and post content across multiple social media platforms automatically, improving marketing efficiency.",
        image: "https://images.pexels.com/photos/267389/pexels-photo-267389.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: ["n8n", "Twitter API", "Facebook API", "Automation"],
        results: ["Consistent posting", "Multi-platform support", "Time savings for marketing teams"],
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub position: &'static str,
    pub company: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: [Testimonial; 8] = [
    Testimonial {
        id: 1,
        name: "Ahmed Hassan",
        position: "Operations Director",
        company: "Restaurant Chain",
        content: "CodByt's POS system with ERP integration has revolutionized our restaurant operations. The automation features have reduced our order processing time by 70% and eliminated manual errors completely. The team was professional throughout the entire process.",
        rating: 5,
    },
    Testimonial {
        id: 2,
        name: "Sarah Mitchell",
        position: "IT Manager",
        company: "Regional Bank",
        content: "The file management system CodByt built for us handles multi-branch operations seamlessly. The task management integration has improved our team productivity by 40%. They delivered on time and exceeded our expectations.",
        rating: 5,
    },
    Testimonial {
        id: 3,
        name: "David Chen",
        position: "Marketing Manager",
        company: "E-commerce Platform",
        content: "Their social media automation workflow has been incredible. We're posting consistently across 5 platforms while saving 15 hours per week on manual scheduling. The ROI was immediate and significant.",
        rating: 4,
    },
    Testimonial {
        id: 4,
        name: "Maria Rodriguez",
        position: "CEO",
        company: "Startup Tech",
        content: "CodByt delivered our SaaS platform on time and under budget. The scalability and performance are exactly what we needed for our rapid growth phase. Their technical expertise is outstanding.",
        rating: 5,
    },
    Testimonial {
        id: 5,
        name: "James Wilson",
        position: "Operations Lead",
        company: "Manufacturing Co.",
        content: "The inventory management system they built has transformed our supply chain. Real-time tracking and automated alerts have reduced stockouts by 90%. The implementation was smooth and the training was excellent.",
        rating: 5,
    },
    Testimonial {
        id: 6,
        name: "Lisa Thompson",
        position: "Sales Director",
        company: "Consulting Firm",
        content: "The email parser automation has streamlined our lead management. We're processing 3x more leads with the same team size, and response times are now under 2 hours. This has directly impacted our revenue growth.",
        rating: 4,
    },
    Testimonial {
        id: 7,
        name: "Robert Kim",
        position: "CTO",
        company: "Healthcare Tech",
        content: "CodByt's expertise in full-stack development is outstanding. They understood our complex requirements and delivered a solution that exceeded our expectations. The code quality and documentation are excellent.",
        rating: 5,
    },
    Testimonial {
        id: 8,
        name: "Emily Davis",
        position: "Founder",
        company: "Digital Agency",
        content: "Working with CodByt was seamless from start to finish. Their automation workflows have saved us countless hours and their technical expertise is world-class. They truly understand business needs.",
        rating: 5,
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct BlogPost {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    /// ISO `YYYY-MM-DD`.
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub url: &'static str,
}

pub const BLOG_POSTS: [BlogPost; 4] = [
    BlogPost {
        title: "OpenAI’s GPT-4o: How Multimodal AI Is Changing the Game",
        excerpt: "A deep dive into OpenAI’s latest GPT-4o model, its multimodal capabilities, and what this means for the future of AI-powered applications.",
        author: "Jane Doe",
        date: "2024-06-10",
        read_time: "7 min read",
        category: "AI & Machine Learning",
        image: "https://images.pexels.com/photos/1181671/pexels-photo-1181671.jpeg?auto=compress&cs=tinysrgb&w=800",
        url: "https://openai.com/index/gpt-4o/",
    },
    BlogPost {
        title: "How Figma’s Dev Mode Is Bridging the Gap Between Designers and Developers",
        excerpt: "Figma’s new Dev Mode is revolutionizing design-to-code handoff. Here’s how teams are using it to streamline workflows and reduce friction.",
        author: "Alex Kim",
        date: "2024-05-28",
        read_time: "6 min read",
        category: "Productivity",
        image: "https://images.pexels.com/photos/3861458/pexels-photo-3861458.jpeg?auto=compress&cs=tinysrgb&w=800",
        url: "https://www.figma.com/blog/introducing-dev-mode/",
    },
    BlogPost {
        title: "The Rise of Edge Computing: What Developers Need to Know in 2024",
        excerpt: "Edge computing is no longer just a buzzword. Discover the latest trends, use cases, and how to get started with edge deployments.",
        author: "Priya Nair",
        date: "2024-05-15",
        read_time: "8 min read",
        category: "Cloud & Edge",
        image: "https://images.pexels.com/photos/844124/pexels-photo-844124.jpeg?auto=compress&cs=tinysrgb&w=800",
        url: "https://www.techrepublic.com/article/edge-computing-trends/",
    },
    BlogPost {
        title: "Why Every Business Needs a Zero Trust Security Strategy",
        excerpt: "Cyber threats are evolving. Learn why Zero Trust is the new standard for enterprise security and how to implement it effectively.",
        author: "Michael Lee",
        date: "2024-04-30",
        read_time: "9 min read",
        category: "Security",
        image: "https://images.pexels.com/photos/3861969/pexels-photo-3861969.jpeg?auto=compress&cs=tinysrgb&w=800",
        url: "https://www.csoonline.com/article/3560747/what-is-zero-trust.html",
    },
];

/// Options of the "Service Interest" select on the contact form.
pub const CONTACT_SERVICES: [&str; 6] = [
    "SaaS Solutions",
    "Automation Workflows",
    "Full-Stack Development",
    "Web Development & Design",
    "Custom IT Solutions",
    "Consulting Services",
];

pub const FOOTER_SERVICES: [&str; 5] = [
    "SaaS Solutions",
    "Automation Workflows",
    "Full-Stack Development",
    "Web Development",
    "Custom IT Solutions",
];
