/// The content panels of the page. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    AllStories,
    MyStories,
    Favorites,
    SubmitForm,
    Auth,
    Profile,
}

/// The nav links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nav {
    All,
    MyStories,
    Favorites,
    Submit,
    Login,
    Profile,
}

impl View {
    pub const ALL: [View; 6] = [
        View::AllStories,
        View::MyStories,
        View::Favorites,
        View::SubmitForm,
        View::Auth,
        View::Profile,
    ];

    /// Views that only make sense with a logged in user.
    pub fn requires_user(self) -> bool {
        matches!(self, View::MyStories | View::Favorites | View::SubmitForm | View::Profile)
    }

    /// Navigating to a user-only view while logged out does nothing.
    pub fn transition(self, nav: Nav, logged_in: bool) -> View {
        let target = nav.target();
        if target.requires_user() && !logged_in {
            self
        } else {
            target
        }
    }

    pub fn nav(self) -> Nav {
        match self {
            View::AllStories => Nav::All,
            View::MyStories => Nav::MyStories,
            View::Favorites => Nav::Favorites,
            View::SubmitForm => Nav::Submit,
            View::Auth => Nav::Login,
            View::Profile => Nav::Profile,
        }
    }

    /// Name used for the panel placeholders in the page template.
    pub fn slug(self) -> &'static str {
        match self {
            View::AllStories => "all-stories",
            View::MyStories => "my-stories",
            View::Favorites => "favorites",
            View::SubmitForm => "submit",
            View::Auth => "auth",
            View::Profile => "profile",
        }
    }
}

impl Nav {
    pub const ALL: [Nav; 6] = [Nav::All, Nav::MyStories, Nav::Favorites, Nav::Submit, Nav::Login, Nav::Profile];

    pub fn target(self) -> View {
        match self {
            Nav::All => View::AllStories,
            Nav::MyStories => View::MyStories,
            Nav::Favorites => View::Favorites,
            Nav::Submit => View::SubmitForm,
            Nav::Login => View::Auth,
            Nav::Profile => View::Profile,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Nav::All => "/",
            Nav::MyStories => "/my-stories",
            Nav::Favorites => "/favorites",
            Nav::Submit => "/submit",
            Nav::Login => "/login",
            Nav::Profile => "/profile",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|x| x.path() == path)
    }
}

/// The star next to every story. `far` is the outline, `fas` the filled one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarIcon {
    Outline,
    Filled,
}

impl StarIcon {
    pub fn for_favorite(is_favorite: bool) -> Self {
        if is_favorite { StarIcon::Filled } else { StarIcon::Outline }
    }

    pub fn from_class(class: &str) -> Option<Self> {
        match class {
            "far" => Some(StarIcon::Outline),
            "fas" => Some(StarIcon::Filled),
            _ => None,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            StarIcon::Outline => "far",
            StarIcon::Filled => "fas",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            StarIcon::Outline => StarIcon::Filled,
            StarIcon::Filled => StarIcon::Outline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_in_nav_reaches_its_target() {
        for from in View::ALL {
            for nav in Nav::ALL {
                assert_eq!(from.transition(nav, true), nav.target());
            }
        }
    }

    #[test]
    fn logged_out_nav_to_user_views_is_a_no_op() {
        for from in [View::AllStories, View::Auth] {
            assert_eq!(from.transition(Nav::Favorites, false), from);
            assert_eq!(from.transition(Nav::MyStories, false), from);
            assert_eq!(from.transition(Nav::Submit, false), from);
            assert_eq!(from.transition(Nav::Profile, false), from);
        }
        assert_eq!(View::AllStories.transition(Nav::Login, false), View::Auth);
        assert_eq!(View::Auth.transition(Nav::All, false), View::AllStories);
    }

    #[test]
    fn paths_round_trip_and_unknown_paths_are_rejected() {
        for nav in Nav::ALL {
            assert_eq!(Nav::from_path(nav.path()), Some(nav));
            assert_eq!(nav.target().nav(), nav);
        }
        assert_eq!(Nav::from_path("https://evil.example/"), None);
        assert_eq!(Nav::from_path("/admin"), None);
    }

    #[test]
    fn star_classes() {
        assert_eq!(StarIcon::from_class("far"), Some(StarIcon::Outline));
        assert_eq!(StarIcon::from_class("fas"), Some(StarIcon::Filled));
        assert_eq!(StarIcon::from_class("fa-star"), None);
        assert_eq!(StarIcon::Outline.toggled().class(), "fas");
        assert_eq!(StarIcon::for_favorite(true), StarIcon::Filled);
    }
}
