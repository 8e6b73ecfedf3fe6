//! Footer Section

use leptos::*;

use early_warning::content::footer::{self, TeamMember};
use early_warning::content::{Icon, Link, BRAND, BRAND_MARK};
use early_warning::page::SectionId;

#[component]
pub fn Footer() -> impl IntoView {
    let year = footer::current_year();

    view! {
        <footer id=SectionId::Footer.anchor() class="pt-16 pb-8 bg-gray-900 text-gray-300">
            <div class="container mx-auto px-4">
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-10 mb-12">
                    <div>
                        <div class="flex items-center space-x-3 mb-4">
                            <span class="w-9 h-9 rounded-lg bg-gradient-to-br from-orange-400 to-orange-600 text-white text-sm font-bold flex items-center justify-center">
                                {BRAND_MARK}
                            </span>
                            <span class="text-lg font-bold text-white">{BRAND}</span>
                        </div>
                        <p class="text-sm mb-2">{footer::BLURB}</p>
                        <p class="text-sm text-gray-500">{footer::INSTITUTION}</p>
                    </div>

                    <LinkColumn title="Quick Links" links={&footer::QUICK_LINKS} />

                    <div>
                        <h4 class="font-semibold text-white mb-4">"Contact"</h4>
                        <ul class="space-y-2 text-sm">
                            {footer::CONTACT_LINES.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
                            <li>
                                <a href=footer::CONTACT_EMAIL.href class="hover:text-orange-400">
                                    {Icon::Mail.glyph()} " " {footer::CONTACT_EMAIL.label}
                                </a>
                            </li>
                        </ul>
                    </div>

                    <LinkColumn title="Resources" links={&footer::RESOURCES} />
                </div>

                <div class="border-t border-gray-800 pt-8 text-center">
                    <p class="text-sm mb-4">{footer::CREDITS_TITLE}</p>
                    <div class="flex flex-wrap justify-center gap-6 mb-6">
                        {footer::TEAM.iter().map(|member| view! { <Credit member=*member /> }).collect_view()}
                    </div>
                    <p class="text-xs text-gray-500 mb-1">{footer::COURSE_NOTE}</p>
                    <p class="text-xs text-gray-500">{footer::copyright(year)}</p>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn LinkColumn(title: &'static str, links: &'static [Link]) -> impl IntoView {
    view! {
        <div>
            <h4 class="font-semibold text-white mb-4">{title}</h4>
            <ul class="space-y-2 text-sm">
                {links
                    .iter()
                    .map(|link| view! { <li><a href=link.href class="hover:text-orange-400">{link.label}</a></li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn Credit(member: TeamMember) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center">
            <span class="font-medium text-white mb-1">{member.name}</span>
            <div class="flex space-x-3 text-lg">
                <a href=member.github target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                    {Icon::Github.glyph()}
                </a>
                <a href=member.linkedin target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                    {Icon::Linkedin.glyph()}
                </a>
                <a href=member.mailto() aria-label="Email">
                    {Icon::Mail.glyph()}
                </a>
            </div>
        </div>
    }
}
