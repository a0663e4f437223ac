//! Static information pages (About, Contact, Guide and the legal notices).

use clap::ValueEnum;

/// One of the fixed text pages reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Page {
    About,
    Contact,
    Guide,
    Privacy,
    Terms,
    Dmca,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::About => "About",
            Page::Contact => "Contact",
            Page::Guide => "Guide",
            Page::Privacy => "Privacy Policy",
            Page::Terms => "Terms of Service",
            Page::Dmca => "DMCA",
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            Page::About => {
                "This Break-Even Point Calculator is a business tool designed to provide \
                 instant, accurate financial insights. Created by HSINI MOHAMED."
            }
            Page::Contact => {
                "For inquiries, please reach out to hsini.web@gmail.com or visit doodax.com."
            }
            Page::Guide => {
                "To use the calculator, enter your total fixed costs, the selling price for a \
                 single unit, and the variable costs to produce a single unit. The calculator \
                 then shows your break-even point in units and revenue, along with the \
                 contribution margin each unit earns."
            }
            Page::Privacy => {
                "Your privacy is important to us. This calculator runs entirely on your own \
                 machine: the numbers you enter are never sent anywhere and are not stored. \
                 We do not collect any personal or financial information."
            }
            Page::Terms => {
                "This tool is provided for informational purposes only and should not be \
                 considered financial advice. By using this calculator, you agree to not hold \
                 the creators liable for any decisions made based on its results."
            }
            Page::Dmca => {
                "If you believe that your copyrighted work has been used in a way that \
                 constitutes copyright infringement, please notify our copyright agent at \
                 hsini.web@gmail.com."
            }
        }
    }
}
