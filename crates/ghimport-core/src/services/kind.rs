//! Closed set of supported services

use std::fmt;

use serde::{Deserialize, Serialize};

/// A GitHub resource group the importer can walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    Members,
    Organization,
    OrganizationBlocks,
    OrganizationProjects,
    OrganizationWebhooks,
    Repositories,
    Teams,
    UserSshKeys,
}

impl ServiceKind {
    /// Every service, in name order
    pub const ALL: [ServiceKind; 8] = [
        ServiceKind::Members,
        ServiceKind::Organization,
        ServiceKind::OrganizationBlocks,
        ServiceKind::OrganizationProjects,
        ServiceKind::OrganizationWebhooks,
        ServiceKind::Repositories,
        ServiceKind::Teams,
        ServiceKind::UserSshKeys,
    ];

    /// Service name as used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Members => "members",
            ServiceKind::Organization => "organization",
            ServiceKind::OrganizationBlocks => "organization_blocks",
            ServiceKind::OrganizationProjects => "organization_projects",
            ServiceKind::OrganizationWebhooks => "organization_webhooks",
            ServiceKind::Repositories => "repositories",
            ServiceKind::Teams => "teams",
            ServiceKind::UserSshKeys => "user_ssh_keys",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ServiceKind::Members => "Organization memberships",
            ServiceKind::Organization => "Organization settings",
            ServiceKind::OrganizationBlocks => "Users blocked by the organization",
            ServiceKind::OrganizationProjects => "Organization-level projects",
            ServiceKind::OrganizationWebhooks => "Organization webhooks",
            ServiceKind::Repositories => "Repositories with their branch protections and collaborators",
            ServiceKind::Teams => "Teams, team memberships and team repositories",
            ServiceKind::UserSshKeys => "SSH keys of the authenticated user",
        }
    }

    /// Look up a service by exact name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
