//! Client-side behavior bundled with exported pages

const PRELUDE: &str = "document.addEventListener('DOMContentLoaded', function () {";

const MOBILE_MENU: &str = r#"
    // Mobile menu
    var toggle = document.querySelector('.mobile-menu-toggle');
    var menu = document.querySelector('.navbar-menu');
    if (toggle && menu) {
        var closeMenu = function () {
            menu.classList.remove('mobile-menu-open');
            toggle.classList.remove('active');
        };
        toggle.addEventListener('click', function () {
            menu.classList.toggle('mobile-menu-open');
            toggle.classList.toggle('active');
        });
        document.addEventListener('click', function (event) {
            if (!toggle.contains(event.target) && !menu.contains(event.target)) {
                closeMenu();
            }
        });
        menu.querySelectorAll('.nav-link').forEach(function (link) {
            link.addEventListener('click', closeMenu);
        });
    }
"#;

// One open item per .faq-container
const FAQ_ACCORDION: &str = r#"
    // FAQ accordion
    document.querySelectorAll('.faq-question').forEach(function (question) {
        question.addEventListener('click', function () {
            var group = question.closest('.faq-container') || document;
            var wasOpen = question.classList.contains('active');
            group.querySelectorAll('.faq-question').forEach(function (other) {
                other.classList.remove('active');
                if (other.nextElementSibling) {
                    other.nextElementSibling.classList.remove('active');
                }
            });
            if (!wasOpen) {
                question.classList.add('active');
                if (question.nextElementSibling) {
                    question.nextElementSibling.classList.add('active');
                }
            }
        });
    });
"#;

const SMOOTH_SCROLL: &str = r##"
    // Smooth scrolling for in-page anchors
    document.querySelectorAll('a[href^="#"]').forEach(function (anchor) {
        anchor.addEventListener('click', function (event) {
            var href = anchor.getAttribute('href');
            if (href.length < 2) {
                return;
            }
            var target = document.querySelector(href);
            if (target) {
                event.preventDefault();
                target.scrollIntoView({ behavior: 'smooth', block: 'start' });
            }
        });
    });
"##;

const POSTLUDE: &str = "});";

/// Behavior script for an exported page
pub fn behavior_script(include_faq: bool) -> String {
    let mut js = String::from(PRELUDE);
    js.push_str(MOBILE_MENU);
    if include_faq {
        js.push_str(FAQ_ACCORDION);
    }
    js.push_str(SMOOTH_SCROLL);
    js.push_str(POSTLUDE);
    js
}
