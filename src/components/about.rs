//! About page: mission, contact channels, contact form
//!
//! The mission panels slide in from the sides the first time they become
//! visible; the contact cards fade up. The form surfaces its result through
//! the notification service.

use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, DISCORD_LOGO, ENVELOPE, GLOBE, INSTAGRAM_LOGO, USERS};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::design_system::{Button, Card, CardBody, Input, TextArea};
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::services::notification_service::{show_error, show_success};
use crate::services::reveal_service::bind_one_shot_reveals;

#[component]
pub fn About() -> impl IntoView {
    Effect::new(move |_| {
        let callback = Closure::once_into_js(|| {
            bind_one_shot_reveals(".reveal-on-view");
        });
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(callback.unchecked_ref());
        }
    });

    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let handle_submit = move |evt: ev::MouseEvent| {
        evt.prevent_default();
        if email.get_untracked().trim().is_empty() || message.get_untracked().trim().is_empty() {
            show_error(
                "Missing details",
                Some("Please fill in both your email address and a message."),
            );
            return;
        }
        log::info!("Contact form submitted");
        show_success(
            "Message sent!",
            Some("Thank you for reaching out. We will get back to you soon."),
        );
        email.set(String::new());
        message.set(String::new());
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <Navbar />

            <header class="pt-28 pb-16 px-6 bg-gradient-to-b from-blue-900/5 to-transparent">
                <div class="max-w-7xl mx-auto text-center animate-fade-in">
                    <div class="inline-block p-3 rounded-full bg-sky-100 mb-6">
                        <img src="/images/logo.svg" alt="TechSoc logo" class="h-16 md:h-20 w-auto" />
                    </div>
                    <h1 class="text-4xl md:text-5xl font-bold mb-6">
                        "About "
                        <span class="text-blue-900">"TECH"</span>
                        <span class="text-red-600">"SOC"</span>
                    </h1>
                    <p class="text-slate-500 max-w-3xl mx-auto mb-12 text-lg">
                        "TechSoc is the student society where software engineering \
                         students develop, collaborate, and innovate together."
                    </p>
                </div>
            </header>

            <main class="flex-grow">
                // Mission
                <section class="py-16 px-8 md:px-12 lg:px-24">
                    <div class="max-w-7xl mx-auto">
                        <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                            <div class="reveal-on-view from-left">
                                <div class="space-y-8">
                                    <div>
                                        <h2 class="text-3xl font-bold text-blue-900 mb-4">
                                            "Vision"
                                        </h2>
                                        <p class="text-slate-500 text-justify">
                                            "To be the home where software engineering students \
                                             grow their craft and contribute to technology and \
                                             industry."
                                        </p>
                                    </div>
                                    <div>
                                        <h2 class="text-3xl font-bold text-blue-900 mb-4">
                                            "Mission"
                                        </h2>
                                        <ul class="list-disc pl-6 space-y-3 text-slate-500">
                                            <li>
                                                "Provide a forum for students to share experience \
                                                 and knowledge"
                                            </li>
                                            <li>
                                                "Encourage participation in campus activities and \
                                                 student-led initiatives"
                                            </li>
                                            <li>
                                                "Run events and workshops around software \
                                                 engineering practice"
                                            </li>
                                            <li>
                                                "Help members build the skills that prepare them \
                                                 for industry"
                                            </li>
                                            <li>
                                                "Foster a culture of innovation and creativity"
                                            </li>
                                        </ul>
                                    </div>
                                </div>
                            </div>
                            <div class="relative rounded-xl overflow-hidden">
                                <div class="w-full flex justify-center">
                                    <img
                                        src="/images/logo.svg"
                                        alt="TechSoc"
                                        class="reveal-on-view from-right w-3/5 h-auto object-cover"
                                    />
                                </div>
                            </div>
                        </div>
                    </div>
                </section>

                // Contact
                <section class="py-16 px-6 bg-gradient-to-r from-blue-900/5 to-sky-400/5">
                    <div class="max-w-7xl mx-auto">
                        <div class="text-center mb-12">
                            <h2 class="text-3xl font-bold text-blue-900 mb-6">"Get in Touch"</h2>
                            <p class="text-slate-500 max-w-2xl mx-auto">
                                "Have a question or want to get involved? We would love to \
                                 hear from you. Reach us through the channels below or send \
                                 a message."
                            </p>
                        </div>
                        <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                            // Contact channels
                            <div class="space-y-8">
                                <Card class="reveal-on-view delay-200">
                                    <CardBody>
                                        <div class="rounded-lg bg-sky-100 p-4 inline-flex mb-6 text-sky-600">
                                            <Icon icon=GLOBE size="24px" />
                                        </div>
                                        <h3 class="font-medium text-xl text-blue-900 mb-4">
                                            "Email"
                                        </h3>
                                        <p class="text-slate-500 mb-4">
                                            "Email us about general questions, collaboration \
                                             opportunities, or event enquiries."
                                        </p>
                                        <a
                                            href="mailto:hello@techsoc.northfield.ac.uk"
                                            class="text-sky-600 hover:text-blue-900 font-medium transition-colors"
                                        >
                                            "hello@techsoc.northfield.ac.uk"
                                        </a>
                                    </CardBody>
                                </Card>

                                <Card class="reveal-on-view delay-300">
                                    <CardBody>
                                        <div class="rounded-lg bg-sky-100 p-4 inline-flex mb-6 text-sky-600">
                                            <Icon icon=USERS size="24px" />
                                        </div>
                                        <h3 class="font-medium text-xl text-blue-900 mb-4">
                                            "Social Media"
                                        </h3>
                                        <p class="text-slate-500 mb-4">
                                            "Follow us for the latest news, events, and \
                                             discussions."
                                        </p>
                                        <div class="flex space-x-4 text-blue-900">
                                            <a
                                                href="https://instagram.com/techsoc.northfield"
                                                class="hover:text-sky-600 transition-colors duration-300"
                                                aria-label="Instagram"
                                            >
                                                <Icon icon=INSTAGRAM_LOGO size="20px" />
                                            </a>
                                            <a
                                                href="https://discord.gg/techsoc"
                                                class="hover:text-sky-600 transition-colors duration-300"
                                                aria-label="Discord"
                                            >
                                                <Icon icon=DISCORD_LOGO size="20px" />
                                            </a>
                                            <a
                                                href="mailto:hello@techsoc.northfield.ac.uk"
                                                class="hover:text-sky-600 transition-colors duration-300"
                                                aria-label="Email"
                                            >
                                                <Icon icon=ENVELOPE size="20px" />
                                            </a>
                                        </div>
                                    </CardBody>
                                </Card>
                            </div>

                            // Contact form
                            <div class="reveal-on-view delay-300 bg-white rounded-xl p-8 shadow-sm">
                                <h3 class="font-medium text-2xl text-blue-900 mb-6">
                                    "Send a Message"
                                </h3>
                                <form class="space-y-6" on:submit=move |evt: ev::SubmitEvent| evt.prevent_default()>
                                    <div>
                                        <label class="block text-sm font-medium text-blue-900 mb-2">
                                            "Email Address"
                                        </label>
                                        <Input
                                            value=email
                                            input_type="email"
                                            placeholder="you@example.com"
                                        />
                                    </div>

                                    <div>
                                        <label class="block text-sm font-medium text-blue-900 mb-2">
                                            "Message"
                                        </label>
                                        <TextArea
                                            value=message
                                            rows=5
                                            placeholder="Tell us about your question, idea, or how you'd like to get involved..."
                                        />
                                    </div>

                                    <Button on_click=handle_submit class="w-full">
                                        "Send Message"
                                    </Button>
                                </form>
                            </div>
                        </div>
                    </div>
                </section>
            </main>

            <Footer />
        </div>
    }
}
