// Copy for the landing page. Kept out of the view code so the markup in
// pages/landing.rs stays readable.

pub struct Pillar {
    pub title: &'static str,
    pub body: &'static str,
}

pub struct Bonus {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const HEADLINE: &str = "DON'T START A BUSINESS...";
pub const SUBHEADLINE: &str = "Until You Read This Rant";
pub const TAGLINE: &str = "A 37-Page Reality-Slapping Guide for Broke Geniuses, Skeptical Hustlers, and Anyone One More Motivational Quote Away From Snapping";

pub const PROBLEMS: &[&str] = &[
    "You built a logo. A website. Picked a color scheme… still no sales.",
    "You launched a YouTube channel… and got 0 views in 2 weeks.",
    "You tried affiliate marketing… made ₦273.12.",
    "You bought a ₦50k course… it told you to 'just provide value.'",
    "You started a Shopify store… but forgot customers don't fall from the sky.",
    "You've done everything 'right.' And yet… nothing's working.",
];

pub const NOT_YOUR_FAULT: &[&str] = &[
    "It's not your fault.",
    "You're not lazy.",
    "You're not broken.",
];

pub const PILLARS: &[Pillar] = &[
    Pillar {
        title: "No Fluff",
        body: "Just raw, actionable insights without the filler content",
    },
    Pillar {
        title: "No Funnels",
        body: "No upsells, no endless email sequences, just the truth",
    },
    Pillar {
        title: "No False Promises",
        body: "Real strategies for real people starting from ₦0",
    },
];

pub const CHAPTERS: &[&str] = &[
    "Stop Starting Businesses You Secretly Hate",
    "No One Cares About Your Dream",
    "Motivation Is A Scam. Here's What Works",
    "The Real Reason You Haven't Made Money Yet",
    "How To Sell Without Feeling Like A Street Hawker",
    "Your Audience Doesn't Want Content. They Want This",
    "You Don't Need A Niche. You Need This Instead",
    "Forget Branding. Solve THIS First",
    "How To Make People Pay You... Without Being Famous",
    "Followers ≠ Customers. Never Confuse Them Again",
    "You've Been Lied To About Funnels",
    "Money Doesn't Come From Skills. It Comes From THIS",
    "Make An Offer So Good They Feel Dumb Saying No",
    "Why Copywriting Is The One Skill You Can't Ignore",
    "The Trap Of Building A Personal Brand Too Early",
    "No, You Don't Need LLC, Website, Logo, or Staff",
    "Focus On This Instead (It's Boring But It Works)",
    "The Death Spiral Of Building The Wrong Product",
    "If It Doesn't Sell Ugly, It Won't Sell Polished",
    "The Lie Of 'Multiple Streams' When You're Broke",
    "Why Going Viral Too Soon Can RUIN You",
    "Forget Systems. Build Tiny Machines Instead",
    "The 2 Things I Did Every Week That Changed Everything",
    "How To Make Your First ₦10k Without Selling Your Soul",
    "The Only 3 Questions That Matter Before You Launch",
];

pub const BONUSES: &[Bonus] = &[
    Bonus {
        title: "Bonus 1: Impulse Offer Alchemy",
        description: "How to build offers so tasty, people chase you with their wallet.",
    },
    Bonus {
        title: "Bonus 2: Landing Pages That Sell (Not Sedate)",
        description: "Build landing pages that move people — even if you suck at design.",
    },
    Bonus {
        title: "Bonus 3: The Broke, Hungry, Angry Blueprint",
        description: "For the nights when your balance says ₦113 and nothing is working. This is your sanity manual.",
    },
    Bonus {
        title: "Bonus 4: The Guarantee",
        description: "Didn't love it? Email me and say: 'Yo, this rant sucked. I want my ₦4500 back.' No guilt. No quiz. No forms. Just a fast refund and mutual respect.",
    },
];

pub const NOT_FAKE_FLEX: &[&str] = &[
    "I don't have a Lambo.",
    "I don't sell ₦99k masterminds.",
    "I don't promise riches by Tuesday.",
];

pub const PACKAGE: &[&str] = &[
    "The 37-Page Rant",
    "4 Power Bonuses",
    "A Weirdly Honest Guarantee",
    "Instant Download",
    "Lifetime Access",
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What if I'm too lazy to finish it?",
        answer: "You'll be entertained, offended, and inspired — all in one sitting.",
    },
    Faq {
        question: "Will this help if I live in Nigeria and can't use PayPal or Stripe?",
        answer: "Absolutely. It's designed for Nigerians. No foreign fluff.",
    },
    Faq {
        question: "Will this make me rich instantly?",
        answer: "No. But it'll finally get you out of your own way.",
    },
    Faq {
        question: "I suck at marketing. Can I still win?",
        answer: "Yes. Especially you.",
    },
    Faq {
        question: "I already started a business. It's not working. Help?",
        answer: "This will expose what's broken — and how to fix it.",
    },
    Faq {
        question: "Do I need a laptop to apply this?",
        answer: "Nope. I built my first wins from my phone.",
    },
    Faq {
        question: "What if my cousin who sells Herbalife told me not to buy it?",
        answer: "Then it's probably exactly what you need.",
    },
    Faq {
        question: "I have ADHD. Is this readable?",
        answer: "Chapters are short, punchy, and addictive. You'll devour it.",
    },
    Faq {
        question: "I've wasted money before. Why trust this?",
        answer: "Because this one comes with a money-back guarantee.",
    },
    Faq {
        question: "Will this offend me?",
        answer: "Probably. But it'll also unlock something real.",
    },
];

pub const OUTCOMES: &[&str] = &[
    "You'll finally understand what makes money online.",
    "You'll stop wasting time, energy, and hope on BS.",
    "You'll know exactly what to do next.",
];
