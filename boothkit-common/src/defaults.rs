//! Compiled default content
//!
//! The single registry of default copy for every section. Built once behind
//! a `Lazy` and injected into the resolver; fetched content merges over
//! these values, so rendering never sees a blank field.

use once_cell::sync::Lazy;

use crate::model::{
    AboutContent, AboutPageContent, BrandingContent, CollectionHeader, ContactContent,
    ContactPageContent, CtaContent, FaqCategory, FaqQuestion, FooterContent, FooterLink,
    HeroContent, MetadataContent, PhotoBooth, PhotographyContent, PhotographyHeader,
    PhotographyItem, ServiceArea, ServiceItem, ServicesContent, SocialContent, Stat, Testimonial,
    TestimonialsContent, ValueItem,
};

static DEFAULTS: Lazy<DefaultContent> = Lazy::new(DefaultContent::compiled);

/// Compiled-in defaults singleton.
pub fn defaults() -> &'static DefaultContent {
    &DEFAULTS
}

/// Default value for every section of the site.
#[derive(Debug, Clone)]
pub struct DefaultContent {
    pub metadata: MetadataContent,
    pub branding: BrandingContent,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub stats: Vec<Stat>,
    pub services: ServicesContent,
    pub photo_booths: Vec<PhotoBooth>,
    pub photography: PhotographyContent,
    pub cta: CtaContent,
    pub testimonials: TestimonialsContent,
    pub faq_categories: Vec<FaqCategory>,
    pub footer: FooterContent,
    pub contact: ContactContent,
    pub social: SocialContent,
    pub about_page: AboutPageContent,
    pub contact_page: ContactPageContent,
    pub service_areas: Vec<ServiceArea>,
    pub values: Vec<ValueItem>,
}

impl DefaultContent {
    /// The default copy shipped with the site.
    pub fn compiled() -> Self {
        Self {
            metadata: metadata(),
            branding: branding(),
            hero: hero(),
            about: about(),
            stats: stats(),
            services: services(),
            photo_booths: photo_booths(),
            photography: photography(),
            cta: cta(),
            testimonials: testimonials(),
            faq_categories: faq_categories(),
            footer: footer(),
            contact: contact(),
            social: social(),
            about_page: about_page(),
            contact_page: contact_page(),
            service_areas: service_areas(),
            values: values(),
        }
    }
}

fn metadata() -> MetadataContent {
    MetadataContent {
        site_title: "Susie Calvert Photography | Premium Photo Booth Experiences".into(),
        site_description: "Southern California's premier photo booth experience company. \
            Premium photo booths, 360° video experiences, and professional photography for \
            weddings, corporate events, and celebrations."
            .into(),
        author: "Susie Calvert Photography".into(),
        keywords: "photo booth rental, 360 video booth, wedding photography, event photography, \
            Southern California, Los Angeles, Orange County, San Diego"
            .into(),
        og_title: "Susie Calvert Photography | Premium Photo Booth Experiences".into(),
        og_description: "Transform your moments into unforgettable memories with our premium \
            photo booths—bringing fun, laughter, and sparkle to every celebration!"
            .into(),
        og_image: "/og-image.jpg".into(),
        twitter_card: "summary_large_image".into(),
        favicon: "/favicon.svg".into(),
        theme_color: "#c59d5f".into(),
    }
}

fn branding() -> BrandingContent {
    BrandingContent {
        site_name: "Susie Calvert Photography".into(),
        company_name: "Susie Calvert Photography".into(),
        tagline: "Creating unforgettable memories, one snapshot at a time.".into(),
        logo_url: "/logo.svg".into(),
    }
}

fn hero() -> HeroContent {
    HeroContent {
        tagline: "Magic starts here".into(),
        title_line1: "Susie's".into(),
        title_line2: "Photography".into(),
        title_line3: "Magical Memories".into(),
        description: "Transform your moments into unforgettable memories with our premium \
            photo booths—bringing fun, laughter, and sparkle to every celebration!"
            .into(),
        cta_text: "Inquire Now".into(),
        rating: "5.0".into(),
        review_count: "373+".into(),
    }
}

fn about() -> AboutContent {
    AboutContent {
        section_label: "About Us".into(),
        title: "Creating Unforgettable Moments".into(),
        paragraph1: "At Susie Calvert Photography, we believe every event deserves to be \
            extraordinary. What started as a passion for capturing joy has grown into Southern \
            California's premier photo booth experience company."
            .into(),
        paragraph2: "Our mission is simple: transform your celebrations into unforgettable \
            experiences. With state-of-the-art equipment, elegant design options, and \
            personalized service, we ensure every moment is picture-perfect."
            .into(),
        paragraph3: "From intimate weddings to corporate galas, we've had the privilege of \
            being part of thousands of special moments. Let us help make your next event truly \
            magical."
            .into(),
    }
}

fn stats() -> Vec<Stat> {
    vec![
        Stat {
            id: "events-celebrated".into(),
            icon: "heart".into(),
            label: "Events Celebrated".into(),
            value: "1,000+".into(),
        },
        Stat {
            id: "five-star-reviews".into(),
            icon: "award".into(),
            label: "Five-Star Reviews".into(),
            value: "373".into(),
        },
        Stat {
            id: "happy-clients".into(),
            icon: "users".into(),
            label: "Happy Clients".into(),
            value: "500+".into(),
        },
        Stat {
            id: "years-experience".into(),
            icon: "sparkles".into(),
            label: "Years Experience".into(),
            value: "5+".into(),
        },
    ]
}

fn services() -> ServicesContent {
    ServicesContent {
        header: CollectionHeader {
            title_part1: "Our".into(),
            title_part2: "Signature".into(),
            title_part3: "Services".into(),
            description: "From intimate gatherings to grand celebrations, we bring the perfect \
                blend of elegance and entertainment to every event."
                .into(),
        },
        items: vec![
            ServiceItem {
                id: "photo-booth".into(),
                name: "Photo Booth".into(),
                description: "Classic photo booth fun with modern technology. High-quality \
                    prints, digital sharing, and unlimited sessions for your guests."
                    .into(),
                price: String::new(),
                featured: true,
            },
            ServiceItem {
                id: "360-booth".into(),
                name: "360° Experience".into(),
                description: "The ultimate party centerpiece. Capture stunning slow-motion \
                    videos from every angle with our state-of-the-art 360° booth."
                    .into(),
                price: String::new(),
                featured: true,
            },
            ServiceItem {
                id: "backdrops".into(),
                name: "Custom Backdrops".into(),
                description: "Transform your event with our curated collection of elegant \
                    backdrops. From florals to modern designs, we have the perfect setting."
                    .into(),
                price: String::new(),
                featured: true,
            },
        ],
    }
}

fn photo_booths() -> Vec<PhotoBooth> {
    vec![
        PhotoBooth {
            id: "mirror-booth".into(),
            slug: "mirror-booth".into(),
            title: "Mirror Booth".into(),
            tagline: "The Ultimate Interactive Photo Experience".into(),
            description: "Sleek, modern, and interactive full-length mirror experience.".into(),
            long_description: "Step into the spotlight with our stunning Mirror Booth – a \
                full-length, interactive mirror that brings Hollywood glamour to your event. \
                Guests are greeted with customizable animations, touch-screen prompts, and \
                flattering lighting that makes everyone look their best. Perfect for weddings, \
                corporate events, and milestone celebrations."
                .into(),
            badge: "Most Popular".into(),
            setup_time: "45 mins".into(),
            capacity: "1-4 guests".into(),
            print_time: "10 seconds".into(),
            min_booking: "2 hours".into(),
            inclusions: "Professional setup & breakdown, Touch-screen mirror interface, \
                Instant photo printing, Digital gallery access, Custom branding options, \
                Props & backdrop included, Attendant for entire event, Unlimited photos per guest"
                .into(),
            features: "Interactive Touch Screen, Professional Lighting, Instant Prints, \
                Digital Sharing"
                .into(),
        },
        PhotoBooth {
            id: "micro-photo-booth".into(),
            slug: "micro-photo-booth".into(),
            title: "Micro Photo Booth".into(),
            tagline: "Compact Elegance, Maximum Fun".into(),
            description: "Compact, stylish, and ideal for smaller spaces.".into(),
            long_description: "Don't let space constraints limit your fun! Our Micro Photo \
                Booth delivers the full photo booth experience in a sleek, compact design. \
                Perfect for intimate venues, cocktail hours, or as an addition to larger \
                events. Small footprint, big memories."
                .into(),
            badge: String::new(),
            setup_time: "30 mins".into(),
            capacity: "1-3 guests".into(),
            print_time: "8 seconds".into(),
            min_booking: "2 hours".into(),
            inclusions: "Professional setup & breakdown, High-resolution camera system, \
                Instant photo printing, Digital gallery access, Custom backdrop selection, \
                Props package included, On-site attendant, Unlimited sessions"
                .into(),
            features: "Space-Saving Design, High-Resolution Camera, Custom Backdrops, \
                Quick Turnaround"
                .into(),
        },
        PhotoBooth {
            id: "360-video-booth".into(),
            slug: "360-video-booth".into(),
            title: "360 Video Booth".into(),
            tagline: "Capture Every Angle in Stunning Motion".into(),
            description: "Capture stunning slow-motion videos with a full 360 spin and \
                customizable music of your choice."
                .into(),
            long_description: "Be the star of your own music video with our 360 Video Booth! \
                Step onto the platform as our camera orbits around you, capturing stunning \
                slow-motion footage from every angle. Add your favorite music, custom \
                overlays, and special effects for shareable content that will make your event \
                unforgettable."
                .into(),
            badge: "Premium".into(),
            setup_time: "60 mins".into(),
            capacity: "1-4 guests".into(),
            print_time: "30 seconds".into(),
            min_booking: "3 hours".into(),
            inclusions: "Professional setup & breakdown, Premium lighting system, \
                Professional styling area, Instant & retouched prints, Digital gallery access, \
                Luxury backdrop options, Premium props collection, Dedicated attendant, \
                Hair & makeup station"
                .into(),
            features: "360° Rotating Camera, Slow Motion Magic, Custom Music, Instant Sharing"
                .into(),
        },
        PhotoBooth {
            id: "open-air-booth".into(),
            slug: "open-air-booth".into(),
            title: "Open-Air Booth".into(),
            tagline: "Unlimited Space, Unlimited Creativity".into(),
            description: "Perfect for group shots with customizable backdrops.".into(),
            long_description: "Go big with our Open-Air Booth! Without the constraints of an \
                enclosed space, this setup allows for larger groups, creative poses, and \
                stunning backdrop options. Perfect for events where you want maximum \
                flexibility and the ability to capture everyone from the dance floor to the \
                red carpet."
                .into(),
            badge: String::new(),
            setup_time: "45 mins".into(),
            capacity: "1-10+ guests".into(),
            print_time: "10 seconds".into(),
            min_booking: "2 hours".into(),
            inclusions: "Professional setup & breakdown, Open-air photo station, \
                Digital instant sharing, Online gallery access, Customizable backdrop, \
                Props package included, Mobile-friendly interface, Social media integration"
                .into(),
            features: "Flexible Layout, Backdrop Variety, Professional Lighting, \
                Social Integration"
                .into(),
        },
    ]
}

fn photography() -> PhotographyContent {
    PhotographyContent {
        header: PhotographyHeader {
            section_label: "Photography Services".into(),
            title_part1: "Capture Your".into(),
            title_part2: "Perfect".into(),
            title_part3: "Moments".into(),
            description: "From intimate weddings to corporate events, we offer professional \
                photography services to preserve your most important memories. Custom packages \
                available for every occasion."
                .into(),
        },
        items: vec![
            PhotographyItem {
                id: "wedding-photography".into(),
                slug: "wedding-photography".into(),
                title: "Wedding Photography".into(),
                tagline: "Capturing Your Perfect Day".into(),
                description: "Beautiful, timeless wedding photography that tells your unique \
                    love story."
                    .into(),
                long_description: String::new(),
                badge: "Most Popular".into(),
                duration: "Full Day".into(),
                delivery_time: "4-6 weeks".into(),
                min_booking: "6 hours".into(),
                inclusions: "Professional photographer, High-resolution images, Online \
                    gallery, Print release, Engagement session"
                    .into(),
                features: String::new(),
            },
            PhotographyItem {
                id: "event-photography".into(),
                slug: "event-photography".into(),
                title: "Event Photography".into(),
                tagline: "Document Every Moment".into(),
                description: "Professional coverage for corporate events, parties, and \
                    celebrations."
                    .into(),
                long_description: String::new(),
                badge: String::new(),
                duration: "Custom".into(),
                delivery_time: "1-2 weeks".into(),
                min_booking: "2 hours".into(),
                inclusions: "Professional photographer, High-resolution images, Online \
                    gallery, Print release, Social media images"
                    .into(),
                features: String::new(),
            },
            PhotographyItem {
                id: "portrait-photography".into(),
                slug: "portrait-photography".into(),
                title: "Portrait Photography".into(),
                tagline: "Showcase Your Best Self".into(),
                description: "Professional portraits for individuals, families, and headshots."
                    .into(),
                long_description: String::new(),
                badge: String::new(),
                duration: "1-2 hours".into(),
                delivery_time: "1 week".into(),
                min_booking: "1 hour".into(),
                inclusions: "Professional photographer, Studio or location shoot, \
                    High-resolution images, Online gallery, Print release"
                    .into(),
                features: String::new(),
            },
            PhotographyItem {
                id: "commercial-photography".into(),
                slug: "commercial-photography".into(),
                title: "Commercial Photography".into(),
                tagline: "Elevate Your Brand".into(),
                description: "Professional product and brand photography for businesses.".into(),
                long_description: String::new(),
                badge: "Premium".into(),
                duration: "Custom".into(),
                delivery_time: "2-3 weeks".into(),
                min_booking: "3 hours".into(),
                inclusions: "Professional photographer, High-resolution images, Commercial \
                    license, Online gallery, Retouching services"
                    .into(),
                features: String::new(),
            },
        ],
    }
}

fn cta() -> CtaContent {
    CtaContent {
        title_part1: "Ready to".into(),
        title_part2: "Elevate".into(),
        title_part3: "Your Event?".into(),
        description: "Limited spots available for popular dates. Book your photo booth \
            experience today and create memories that last a lifetime."
            .into(),
        primary_button_text: "Inquire Now".into(),
        secondary_button_text: "Get a Quote".into(),
    }
}

fn testimonials() -> TestimonialsContent {
    TestimonialsContent {
        header: CollectionHeader {
            title_part1: "What Our".into(),
            title_part2: "Clients".into(),
            title_part3: "Say".into(),
            description: "Don't just take our word for it—hear from the hosts and guests \
                who've experienced the magic firsthand."
                .into(),
        },
        items: vec![
            Testimonial {
                id: "sarah-johnson".into(),
                name: "Sarah Johnson".into(),
                event: "Wedding Reception".into(),
                text: "Absolutely incredible! The photo booth was the highlight of our \
                    wedding. Our guests couldn't stop raving about it, and the photos turned \
                    out stunning. Worth every penny!"
                    .into(),
                rating: 5,
            },
            Testimonial {
                id: "michael-chen".into(),
                name: "Michael Chen".into(),
                event: "Corporate Event".into(),
                text: "Professional, punctual, and perfect. The 360 booth was a massive hit \
                    at our company gala. The team made setup and breakdown seamless. Highly \
                    recommend!"
                    .into(),
                rating: 5,
            },
            Testimonial {
                id: "emily-rodriguez".into(),
                name: "Emily Rodriguez".into(),
                event: "Birthday Celebration".into(),
                text: "The custom backdrop was absolutely gorgeous! It matched our theme \
                    perfectly and created the most beautiful photos. Can't wait to book again \
                    for our next event."
                    .into(),
                rating: 5,
            },
        ],
    }
}

fn faq_categories() -> Vec<FaqCategory> {
    vec![
        FaqCategory {
            id: "booking-availability".into(),
            category: "Booking & Availability".into(),
            questions: vec![
                FaqQuestion {
                    id: "booking-1".into(),
                    question: "How far in advance should I book?".into(),
                    answer: "We recommend booking at least 2-3 months in advance, especially \
                        for popular dates like weekends and holidays. However, we always try \
                        to accommodate last-minute requests when possible, so don't hesitate \
                        to reach out!"
                        .into(),
                },
                FaqQuestion {
                    id: "booking-2".into(),
                    question: "What is your cancellation policy?".into(),
                    answer: "We understand that plans can change. Cancellations made more \
                        than 30 days before your event date receive a full refund minus a \
                        small processing fee. Cancellations made 14-30 days before receive a \
                        50% refund. Cancellations made less than 14 days before are \
                        non-refundable, but we'll work with you to reschedule if possible."
                        .into(),
                },
                FaqQuestion {
                    id: "booking-3".into(),
                    question: "Can I change my booking date?".into(),
                    answer: "Yes! Date changes are subject to availability. If your new date \
                        is available, we'll happily accommodate the change. Changes made more \
                        than 30 days in advance are free, while changes made closer to the \
                        event may incur a small rescheduling fee."
                        .into(),
                },
            ],
        },
        FaqCategory {
            id: "services-packages".into(),
            category: "Services & Packages".into(),
            questions: vec![
                FaqQuestion {
                    id: "services-1".into(),
                    question: "What's included in your photo booth packages?".into(),
                    answer: "All our packages include unlimited sessions, professional \
                        attendant, instant prints, digital gallery access, custom photo \
                        templates, fun props, and backdrop options. We also offer add-ons \
                        like guest books, custom backdrops, and extended hours."
                        .into(),
                },
                FaqQuestion {
                    id: "services-2".into(),
                    question: "What's the difference between the Photo Booth and 360° \
                        Experience?"
                        .into(),
                    answer: "The Photo Booth is our classic setup perfect for traditional \
                        photos with props and backdrops. The 360° Experience creates \
                        stunning slow-motion videos as guests rotate on a platform, making \
                        for a unique and memorable addition to any event. Both include \
                        instant prints and digital access."
                        .into(),
                },
                FaqQuestion {
                    id: "services-3".into(),
                    question: "Can we customize the photo prints?".into(),
                    answer: "Yes! We offer completely custom photo templates designed to \
                        match your event theme, colors, and branding. You can include logos, \
                        event details, hashtags, and more. We'll work with you to create the \
                        perfect design."
                        .into(),
                },
                FaqQuestion {
                    id: "services-4".into(),
                    question: "What props do you provide?".into(),
                    answer: "We bring a wide variety of fun props including hats, glasses, \
                        signs, boas, and seasonal items. You can also request specific props \
                        or bring your own. We're happy to work with your theme!"
                        .into(),
                },
            ],
        },
        FaqCategory {
            id: "setup-requirements".into(),
            category: "Setup & Requirements".into(),
            questions: vec![
                FaqQuestion {
                    id: "setup-1".into(),
                    question: "Do you provide an attendant?".into(),
                    answer: "Absolutely! Every booking includes a professional, friendly \
                        attendant who will set up, operate the booth, assist guests, and \
                        ensure everything runs smoothly throughout your event."
                        .into(),
                },
                FaqQuestion {
                    id: "setup-2".into(),
                    question: "How much space do you need?".into(),
                    answer: "Our standard photo booth requires approximately 8x8 feet. The \
                        360 booth needs about 10x10 feet. We're flexible and can work with \
                        various space configurations—just let us know your venue details!"
                        .into(),
                },
                FaqQuestion {
                    id: "setup-3".into(),
                    question: "What are your power requirements?".into(),
                    answer: "We need one standard 120V electrical outlet within 20 feet of \
                        the setup area. We bring extension cords and power strips, but let us \
                        know if your venue has any special requirements."
                        .into(),
                },
                FaqQuestion {
                    id: "setup-4".into(),
                    question: "Do you need internet access?".into(),
                    answer: "Internet access is not required for the photo booth to operate, \
                        but it's helpful for instant photo sharing and social media uploads. \
                        We can operate fully offline if needed."
                        .into(),
                },
            ],
        },
        FaqCategory {
            id: "delivery-photos".into(),
            category: "Delivery & Photos".into(),
            questions: vec![
                FaqQuestion {
                    id: "delivery-1".into(),
                    question: "How do guests receive their photos?".into(),
                    answer: "Guests receive instant physical prints on-site. Additionally, \
                        all photos are uploaded to a private online gallery that's accessible \
                        within 24-48 hours. Guests can download, share on social media, or \
                        order additional prints."
                        .into(),
                },
                FaqQuestion {
                    id: "delivery-2".into(),
                    question: "How long will the online gallery be available?".into(),
                    answer: "Your online gallery remains active for 90 days after your \
                        event. During this time, guests can view, download, and share all \
                        photos. After 90 days, we can provide a download link or extend \
                        access for a small fee."
                        .into(),
                },
                FaqQuestion {
                    id: "delivery-3".into(),
                    question: "Can I get all the photos on a USB drive?".into(),
                    answer: "Yes! We can provide all photos on a custom USB drive (included \
                        in some packages or available as an add-on). This is perfect for \
                        keeping a physical backup of all your event memories."
                        .into(),
                },
            ],
        },
        FaqCategory {
            id: "service-area-pricing".into(),
            category: "Service Area & Pricing".into(),
            questions: vec![
                FaqQuestion {
                    id: "pricing-1".into(),
                    question: "What is your service area?".into(),
                    answer: "We proudly serve all of Southern California, including Los \
                        Angeles, Orange County, San Diego, Riverside, and San Bernardino \
                        counties. Travel fees may apply for locations outside our primary \
                        service area."
                        .into(),
                },
                FaqQuestion {
                    id: "pricing-2".into(),
                    question: "Do you charge for travel?".into(),
                    answer: "Travel within our primary service area (Los Angeles, Orange \
                        County, and San Diego counties) is included. Travel fees may apply \
                        for events in outlying areas, but we'll always discuss this upfront \
                        and include it in your quote."
                        .into(),
                },
                FaqQuestion {
                    id: "pricing-3".into(),
                    question: "How does pricing work?".into(),
                    answer: "Pricing is based on several factors including package \
                        selection, event duration, date, and location. We offer transparent, \
                        upfront pricing with no hidden fees. Contact us for a personalized \
                        quote based on your specific event needs."
                        .into(),
                },
                FaqQuestion {
                    id: "pricing-4".into(),
                    question: "Do you offer packages for multiple events?".into(),
                    answer: "Yes! We offer special pricing for clients booking multiple \
                        events or recurring bookings. Contact us to discuss multi-event \
                        packages and discounts."
                        .into(),
                },
            ],
        },
        FaqCategory {
            id: "technical-support".into(),
            category: "Technical & Support".into(),
            questions: vec![
                FaqQuestion {
                    id: "technical-1".into(),
                    question: "What happens if there's a technical issue?".into(),
                    answer: "We always bring backup equipment to every event, and our \
                        experienced attendants are trained to handle any technical situations \
                        quickly. Your event will never be interrupted—we guarantee it!"
                        .into(),
                },
                FaqQuestion {
                    id: "technical-2".into(),
                    question: "What equipment do you use?".into(),
                    answer: "We use professional-grade Canon cameras, studio-quality \
                        lighting, and industry-leading photo booth software. All equipment is \
                        regularly maintained and updated to ensure the best possible results."
                        .into(),
                },
                FaqQuestion {
                    id: "technical-3".into(),
                    question: "Can you accommodate outdoor events?".into(),
                    answer: "Yes! We can set up outdoors as long as we have adequate \
                        protection from direct sunlight and weather. We bring canopies and \
                        can work with your venue to ensure the best setup location."
                        .into(),
                },
            ],
        },
    ]
}

fn footer() -> FooterContent {
    FooterContent {
        description: "Southern California's premier photo booth experience company. Creating \
            unforgettable memories, one snapshot at a time."
            .into(),
        copyright_text: "© Susie Calvert Photography. All rights reserved.".into(),
        services: vec![
            FooterLink {
                id: "photo-booth".into(),
                label: "Photo Booth".into(),
                url: "/photo-booth".into(),
            },
            FooterLink {
                id: "360-experience".into(),
                label: "360° Experience".into(),
                url: "#360".into(),
            },
            FooterLink {
                id: "backdrops".into(),
                label: "Backdrops".into(),
                url: "#backdrops".into(),
            },
            FooterLink {
                id: "gallery".into(),
                label: "Gallery".into(),
                url: "/gallery".into(),
            },
        ],
        company: vec![
            FooterLink {
                id: "about".into(),
                label: "About Us".into(),
                url: "/about".into(),
            },
            FooterLink {
                id: "contact".into(),
                label: "Contact".into(),
                url: "/contact".into(),
            },
            FooterLink {
                id: "faq".into(),
                label: "FAQ".into(),
                url: "/faq".into(),
            },
        ],
    }
}

fn contact() -> ContactContent {
    ContactContent {
        email: "hello@susiecalvert.com".into(),
        phone: "(123) 456-7890".into(),
        address: "Southern California".into(),
        business_hours: "Monday - Saturday, 9:00 AM - 8:00 PM".into(),
    }
}

fn social() -> SocialContent {
    SocialContent {
        instagram: "#".into(),
        facebook: "#".into(),
        tiktok: "#".into(),
        youtube: "#".into(),
        pinterest: "#".into(),
    }
}

fn about_page() -> AboutPageContent {
    AboutPageContent {
        section_label: "About Us".into(),
        title: "Creating Unforgettable Moments".into(),
        intro: "At Susie Calvert Photography, we believe every event deserves to be \
            extraordinary. What started as a passion for capturing joy has grown into \
            Southern California's premier photo booth experience company."
            .into(),
        story_title: "Our Story".into(),
        story_paragraph1: "Susie Calvert Photography was born from a simple belief: every \
            celebration deserves to be captured beautifully. What began as a personal passion \
            for photography and event planning has evolved into one of Southern California's \
            most trusted photo booth experience companies."
            .into(),
        story_paragraph2: "Over the past five years, we've had the incredible privilege of \
            being part of over 1,000 special moments—from intimate backyard weddings to grand \
            corporate galas, from sweet sixteen celebrations to milestone anniversary \
            parties. Each event has taught us something new, and each client has become part \
            of our story."
            .into(),
        story_paragraph3: "Today, we're proud to offer cutting-edge technology, elegant \
            design options, and personalized service that has earned us hundreds of five-star \
            reviews and a reputation for excellence throughout the region."
            .into(),
        mission_title: "Our Mission".into(),
        mission_statement: "To transform your celebrations into unforgettable experiences, \
            one snapshot at a time."
            .into(),
        mission_paragraph1: "Our mission is simple yet profound: to transform your \
            celebrations into unforgettable experiences. We understand that events are more \
            than just dates on a calendar—they're milestones, memories, and moments that \
            matter."
            .into(),
        mission_paragraph2: "With state-of-the-art equipment, elegant design options, and \
            personalized service, we ensure every moment is picture-perfect. But beyond the \
            technology and aesthetics, we're committed to making the entire process seamless \
            and stress-free for you."
            .into(),
        mission_paragraph3: "From the initial consultation to the final delivery, we're here \
            to support you every step of the way, because when you choose Susie Calvert \
            Photography, you're not just getting a photo booth—you're gaining a partner in \
            making your event truly magical."
            .into(),
        service_area_title: "Our Service Area".into(),
        service_area_subtitle: "Serving all of Southern California".into(),
        service_area_note: "We proudly serve Southern California including:".into(),
    }
}

fn contact_page() -> ContactPageContent {
    ContactPageContent {
        section_label: "Contact Us".into(),
        title: "Get In Touch".into(),
        intro: "Have a question or ready to book your event? We'd love to hear from you. \
            Send us a message and we'll respond as soon as possible."
            .into(),
        form_title: "Send Us a Message".into(),
    }
}

fn service_areas() -> Vec<ServiceArea> {
    vec![
        ServiceArea {
            id: "los-angeles".into(),
            region: "Los Angeles".into(),
            coverage: "City & County".into(),
        },
        ServiceArea {
            id: "orange-county".into(),
            region: "Orange County".into(),
            coverage: "All Areas".into(),
        },
        ServiceArea {
            id: "san-diego".into(),
            region: "San Diego".into(),
            coverage: "County Wide".into(),
        },
    ]
}

fn values() -> Vec<ValueItem> {
    vec![
        ValueItem {
            id: "creative-excellence".into(),
            icon: "camera".into(),
            title: "Creative Excellence".into(),
            description: "We bring artistic vision and technical expertise to every event, \
                ensuring your photos are as beautiful as the moments they capture."
                .into(),
        },
        ValueItem {
            id: "passion-for-perfection".into(),
            icon: "heart".into(),
            title: "Passion for Perfection".into(),
            description: "Every detail matters to us. We're committed to making your event \
                unforgettable with exceptional service and attention to detail."
                .into(),
        },
        ValueItem {
            id: "client-focused".into(),
            icon: "target".into(),
            title: "Client-Focused".into(),
            description: "Your vision is our mission. We work closely with you to understand \
                your needs and bring your unique event to life."
                .into(),
        },
        ValueItem {
            id: "unmatched-quality".into(),
            icon: "star".into(),
            title: "Unmatched Quality".into(),
            description: "From state-of-the-art equipment to elegant backdrops, we use only \
                the finest materials and latest technology in the industry."
                .into(),
        },
    ]
}
