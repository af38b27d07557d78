//! Config fixtures shared across CLI tests.

/// A complete app config with a two-step command chain
pub const SHOP_CONFIG: &str = r#"{
  "User": "deploy",
  "DeployDirectory": "/srv/shop",
  "Repo": "git@example.com:acme/shop.git",
  "Commands": ["npm ci", "npm run build"]
}"#;

/// Config without a command chain
pub const BARE_CONFIG: &str = r#"{
  "User": "deploy",
  "DeployDirectory": "/srv/bare",
  "Repo": "git@example.com:acme/bare.git"
}"#;

/// Config with a misspelled key that should draw a warning
pub const TYPO_CONFIG: &str = r#"{
  "User": "deploy",
  "DeployDirectory": "/srv/shop",
  "Repo": "git@example.com:acme/shop.git",
  "Comands": []
}"#;

/// The commands a full deploy of `SHOP_CONFIG` issues before promotion
pub const SHOP_PREPARE: [&str; 8] = [
    "mkdir /srv/shop",
    "mkdir /srv/shop/releases",
    "mkdir /srv/shop/shared",
    "mkdir /srv/shop/releases/build",
    "git clone git@example.com:acme/shop.git /srv/shop/releases/build",
    "cd /srv/shop/releases/build && git checkout v1.2.3",
    "npm ci",
    "npm run build",
];
