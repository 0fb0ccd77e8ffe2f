//! Built-in Go project templates.
//!
//! One function per architecture. Every template is written depth-first:
//! a directory is immediately followed by its contents, which keeps the
//! preview tree readable and satisfies the parent-before-child invariant.
//!
//! Contents reference the module through `{{MODULE}}` (full identifier) and
//! `{{MODULE_NAME}}` (last path segment). Paths never contain placeholders.

use archforge_core::domain::{ArchitectureName, ArchitectureTemplate, DomainError};
use tracing::instrument;

// ── Public API ────────────────────────────────────────────────────────────────

/// Build and validate every built-in template, in canonical order.
#[instrument]
pub fn all_templates() -> Result<Vec<ArchitectureTemplate>, DomainError> {
    ArchitectureName::ALL.into_iter().map(template_for).collect()
}

/// Build and validate the template for one architecture.
pub fn template_for(architecture: ArchitectureName) -> Result<ArchitectureTemplate, DomainError> {
    match architecture {
        ArchitectureName::Flat => flat(),
        ArchitectureName::Ddd => ddd(),
        ArchitectureName::Clean => clean(),
        ArchitectureName::Feature => feature(),
        ArchitectureName::Hexagonal => hexagonal(),
        ArchitectureName::Modular => modular(),
        ArchitectureName::Monorepo => monorepo(),
        ArchitectureName::Cqrs => cqrs(),
        ArchitectureName::Onion => onion(),
        ArchitectureName::Common => common(),
        ArchitectureName::Layered => layered(),
    }
}

// ── Shared files ──────────────────────────────────────────────────────────────

const GO_MOD: &str = "module {{MODULE}}\n\ngo 1.21\n";

const README: &str = r#"# {{MODULE_NAME}}

Module: `{{MODULE}}`

## Getting started

```sh
go mod tidy
go build ./...
```
"#;

const GITIGNORE: &str = "# Binaries\n/bin/\n*.exe\n*.test\n*.out\n\n# Editor\n.idea/\n.vscode/\n\n.env\n";

/// `main.go` for layouts whose entry point wires an HTTP handler package.
const SERVER_MAIN: &str = r#"package main

import (
	"log"
	"net/http"
)

func main() {
	mux := http.NewServeMux()
	mux.HandleFunc("/health", func(w http.ResponseWriter, r *http.Request) {
		w.WriteHeader(http.StatusOK)
	})

	log.Println("{{MODULE_NAME}} listening on :8080")
	log.Fatal(http.ListenAndServe(":8080", mux))
}
"#;

// ── flat ──────────────────────────────────────────────────────────────────────

fn flat() -> Result<ArchitectureTemplate, DomainError> {
    ArchitectureTemplate::builder(ArchitectureName::Flat)
        .file("go.mod", GO_MOD)
        .file(
            "main.go",
            r#"package main

import (
	"log"
	"net/http"
)

func main() {
	http.HandleFunc("/users", listUsers)

	log.Println("{{MODULE_NAME}} listening on :8080")
	log.Fatal(http.ListenAndServe(":8080", nil))
}
"#,
        )
        .file(
            "handlers.go",
            r#"package main

import (
	"encoding/json"
	"net/http"
)

func listUsers(w http.ResponseWriter, r *http.Request) {
	w.Header().Set("Content-Type", "application/json")
	_ = json.NewEncoder(w).Encode([]User{})
}
"#,
        )
        .file(
            "models.go",
            r#"package main

// User is a registered account.
type User struct {
	ID   string `json:"id"`
	Name string `json:"name"`
}
"#,
        )
        .file("README.md", README)
        .file(".gitignore", GITIGNORE)
        .build()
}

// ── ddd ───────────────────────────────────────────────────────────────────────

fn ddd() -> Result<ArchitectureTemplate, DomainError> {
    ArchitectureTemplate::builder(ArchitectureName::Ddd)
        .directory("cmd")
        .directory("cmd/app")
        .file(
            "cmd/app/main.go",
            r#"package main

import (
	"log"
	"net/http"

	"{{MODULE}}/internal/application"
	"{{MODULE}}/internal/infrastructure/persistence"
	httpiface "{{MODULE}}/internal/interfaces/http"
)

func main() {
	repo := persistence.NewMemoryUserRepository()
	svc := application.NewUserService(repo)
	handler := httpiface.NewHandler(svc)

	log.Fatal(http.ListenAndServe(":8080", handler))
}
"#,
        )
        .directory("internal")
        .directory("internal/domain")
        .directory("internal/domain/user")
        .file(
            "internal/domain/user/entity.go",
            r#"package user

// User is the aggregate root of the user bounded context.
type User struct {
	ID    string
	Email string
}
"#,
        )
        .file(
            "internal/domain/user/repository.go",
            r#"package user

// Repository persists users.
type Repository interface {
	Save(u *User) error
	FindByID(id string) (*User, error)
}
"#,
        )
        .directory("internal/application")
        .file(
            "internal/application/user_service.go",
            r#"package application

import "{{MODULE}}/internal/domain/user"

// UserService coordinates user use cases.
type UserService struct {
	repo user.Repository
}

func NewUserService(repo user.Repository) *UserService {
	return &UserService{repo: repo}
}

func (s *UserService) Register(id, email string) error {
	return s.repo.Save(&user.User{ID: id, Email: email})
}
"#,
        )
        .directory("internal/infrastructure")
        .directory("internal/infrastructure/persistence")
        .file(
            "internal/infrastructure/persistence/memory_user_repository.go",
            r#"package persistence

import (
	"errors"
	"sync"

	"{{MODULE}}/internal/domain/user"
)

type MemoryUserRepository struct {
	mu    sync.RWMutex
	users map[string]*user.User
}

func NewMemoryUserRepository() *MemoryUserRepository {
	return &MemoryUserRepository{users: make(map[string]*user.User)}
}

func (r *MemoryUserRepository) Save(u *user.User) error {
	r.mu.Lock()
	defer r.mu.Unlock()
	r.users[u.ID] = u
	return nil
}

func (r *MemoryUserRepository) FindByID(id string) (*user.User, error) {
	r.mu.RLock()
	defer r.mu.RUnlock()
	if u, ok := r.users[id]; ok {
		return u, nil
	}
	return nil, errors.New("user not found")
}
"#,
        )
        .directory("internal/interfaces")
        .directory("internal/interfaces/http")
        .file(
            "internal/interfaces/http/handler.go",
            r#"package http

import (
	nethttp "net/http"

	"{{MODULE}}/internal/application"
)

func NewHandler(svc *application.UserService) nethttp.Handler {
	mux := nethttp.NewServeMux()
	mux.HandleFunc("/users", func(w nethttp.ResponseWriter, r *nethttp.Request) {
		w.WriteHeader(nethttp.StatusNoContent)
	})
	return mux
}
"#,
        )
        .file("go.mod", GO_MOD)
        .file("README.md", README)
        .file(".gitignore", GITIGNORE)
        .build()
}

// ── clean ─────────────────────────────────────────────────────────────────────

fn clean() -> Result<ArchitectureTemplate, DomainError> {
    ArchitectureTemplate::builder(ArchitectureName::Clean)
        .directory("domain")
        .file(
            "domain/user.go",
            r#"package domain

// User is an enterprise business entity.
type User struct {
	ID   string
	Name string
}

// UserRepository is implemented by the repository layer.
type UserRepository interface {
	GetByID(id string) (*User, error)
	Store(u *User) error
}
"#,
        )
        .directory("usecase")
        .file(
            "usecase/user_usecase.go",
            r#"package usecase

import "{{MODULE}}/domain"

type UserUsecase struct {
	repo domain.UserRepository
}

func NewUserUsecase(repo domain.UserRepository) *UserUsecase {
	return &UserUsecase{repo: repo}
}

func (u *UserUsecase) Get(id string) (*domain.User, error) {
	return u.repo.GetByID(id)
}
"#,
        )
        .directory("repository")
        .file(
            "repository/user_repository.go",
            r#"package repository

import (
	"errors"

	"{{MODULE}}/domain"
)

type memoryUserRepository struct {
	users map[string]*domain.User
}

func NewMemoryUserRepository() domain.UserRepository {
	return &memoryUserRepository{users: map[string]*domain.User{}}
}

func (r *memoryUserRepository) GetByID(id string) (*domain.User, error) {
	if u, ok := r.users[id]; ok {
		return u, nil
	}
	return nil, errors.New("not found")
}

func (r *memoryUserRepository) Store(u *domain.User) error {
	r.users[u.ID] = u
	return nil
}
"#,
        )
        .directory("delivery")
        .directory("delivery/http")
        .file(
            "delivery/http/user_handler.go",
            r#"package http

import (
	"encoding/json"
	nethttp "net/http"

	"{{MODULE}}/usecase"
)

type UserHandler struct {
	uc *usecase.UserUsecase
}

func NewUserHandler(uc *usecase.UserUsecase) *UserHandler {
	return &UserHandler{uc: uc}
}

func (h *UserHandler) ServeHTTP(w nethttp.ResponseWriter, r *nethttp.Request) {
	user, err := h.uc.Get(r.URL.Query().Get("id"))
	if err != nil {
		nethttp.Error(w, err.Error(), nethttp.StatusNotFound)
		return
	}
	_ = json.NewEncoder(w).Encode(user)
}
"#,
        )
        .file("go.mod", GO_MOD)
        .file(
            "main.go",
            r#"package main

import (
	"log"
	"net/http"

	delivery "{{MODULE}}/delivery/http"
	"{{MODULE}}/repository"
	"{{MODULE}}/usecase"
)

func main() {
	uc := usecase.NewUserUsecase(repository.NewMemoryUserRepository())
	http.Handle("/users", delivery.NewUserHandler(uc))

	log.Fatal(http.ListenAndServe(":8080", nil))
}
"#,
        )
        .file("README.md", README)
        .file(".gitignore", GITIGNORE)
        .build()
}

// ── feature ───────────────────────────────────────────────────────────────────

fn feature() -> Result<ArchitectureTemplate, DomainError> {
    ArchitectureTemplate::builder(ArchitectureName::Feature)
        .directory("cmd")
        .directory("cmd/server")
        .file(
            "cmd/server/main.go",
            r#"package main

import (
	"log"
	"net/http"

	"{{MODULE}}/internal/features/product"
	"{{MODULE}}/internal/features/user"
)

func main() {
	mux := http.NewServeMux()
	user.Register(mux)
	product.Register(mux)

	log.Fatal(http.ListenAndServe(":8080", mux))
}
"#,
        )
        .directory("internal")
        .directory("internal/features")
        .directory("internal/features/user")
        .file(
            "internal/features/user/handler.go",
            r#"package user

import "net/http"

func Register(mux *http.ServeMux) {
	mux.HandleFunc("/users", list)
}

func list(w http.ResponseWriter, r *http.Request) {
	w.WriteHeader(http.StatusOK)
}
"#,
        )
        .file(
            "internal/features/user/model.go",
            "package user\n\ntype User struct {\n\tID   string\n\tName string\n}\n",
        )
        .directory("internal/features/product")
        .file(
            "internal/features/product/handler.go",
            r#"package product

import "net/http"

func Register(mux *http.ServeMux) {
	mux.HandleFunc("/products", list)
}

func list(w http.ResponseWriter, r *http.Request) {
	w.WriteHeader(http.StatusOK)
}
"#,
        )
        .file(
            "internal/features/product/model.go",
            "package product\n\ntype Product struct {\n\tID    string\n\tPrice int64\n}\n",
        )
        .directory("internal/shared")
        .file(
            "internal/shared/errors.go",
            "package shared\n\nimport \"errors\"\n\nvar ErrNotFound = errors.New(\"not found\")\n",
        )
        .file("go.mod", GO_MOD)
        .file("README.md", README)
        .file(".gitignore", GITIGNORE)
        .build()
}

// ── hexagonal ─────────────────────────────────────────────────────────────────

fn hexagonal() -> Result<ArchitectureTemplate, DomainError> {
    ArchitectureTemplate::builder(ArchitectureName::Hexagonal)
        .directory("cmd")
        .directory("cmd/app")
        .file(
            "cmd/app/main.go",
            r#"package main

import (
	"log"
	"net/http"

	httpadapter "{{MODULE}}/internal/adapters/primary/http"
	"{{MODULE}}/internal/adapters/secondary/repository"
	"{{MODULE}}/internal/core/services"
)

func main() {
	svc := services.NewUserService(repository.NewMemoryUserRepository())

	log.Fatal(http.ListenAndServe(":8080", httpadapter.NewHandler(svc)))
}
"#,
        )
        .directory("internal")
        .directory("internal/core")
        .directory("internal/core/domain")
        .file(
            "internal/core/domain/user.go",
            "package domain\n\ntype User struct {\n\tID   string\n\tName string\n}\n",
        )
        .directory("internal/core/ports")
        .file(
            "internal/core/ports/ports.go",
            r#"package ports

import "{{MODULE}}/internal/core/domain"

// UserService is the driving port.
type UserService interface {
	Get(id string) (*domain.User, error)
}

// UserRepository is the driven port.
type UserRepository interface {
	FindByID(id string) (*domain.User, error)
}
"#,
        )
        .directory("internal/core/services")
        .file(
            "internal/core/services/user_service.go",
            r#"package services

import (
	"{{MODULE}}/internal/core/domain"
	"{{MODULE}}/internal/core/ports"
)

type userService struct {
	repo ports.UserRepository
}

func NewUserService(repo ports.UserRepository) ports.UserService {
	return &userService{repo: repo}
}

func (s *userService) Get(id string) (*domain.User, error) {
	return s.repo.FindByID(id)
}
"#,
        )
        .directory("internal/adapters")
        .directory("internal/adapters/primary")
        .directory("internal/adapters/primary/http")
        .file(
            "internal/adapters/primary/http/handler.go",
            r#"package http

import (
	"encoding/json"
	nethttp "net/http"

	"{{MODULE}}/internal/core/ports"
)

func NewHandler(svc ports.UserService) nethttp.Handler {
	mux := nethttp.NewServeMux()
	mux.HandleFunc("/users", func(w nethttp.ResponseWriter, r *nethttp.Request) {
		user, err := svc.Get(r.URL.Query().Get("id"))
		if err != nil {
			nethttp.Error(w, err.Error(), nethttp.StatusNotFound)
			return
		}
		_ = json.NewEncoder(w).Encode(user)
	})
	return mux
}
"#,
        )
        .directory("internal/adapters/secondary")
        .directory("internal/adapters/secondary/repository")
        .file(
            "internal/adapters/secondary/repository/memory.go",
            r#"package repository

import (
	"errors"

	"{{MODULE}}/internal/core/domain"
	"{{MODULE}}/internal/core/ports"
)

type memoryUserRepository struct {
	users map[string]*domain.User
}

func NewMemoryUserRepository() ports.UserRepository {
	return &memoryUserRepository{users: map[string]*domain.User{}}
}

func (r *memoryUserRepository) FindByID(id string) (*domain.User, error) {
	if u, ok := r.users[id]; ok {
		return u, nil
	}
	return nil, errors.New("user not found")
}
"#,
        )
        .file("go.mod", GO_MOD)
        .file("README.md", README)
        .file(".gitignore", GITIGNORE)
        .build()
}

// ── modular ───────────────────────────────────────────────────────────────────

fn modular() -> Result<ArchitectureTemplate, DomainError> {
    ArchitectureTemplate::builder(ArchitectureName::Modular)
        .directory("cmd")
        .directory("cmd/app")
        .file(
            "cmd/app/main.go",
            r#"package main

import (
	"log"
	"net/http"

	orderhandler "{{MODULE}}/modules/order/handler"
	userhandler "{{MODULE}}/modules/user/handler"
)

func main() {
	mux := http.NewServeMux()
	userhandler.Register(mux)
	orderhandler.Register(mux)

	log.Fatal(http.ListenAndServe(":8080", mux))
}
"#,
        )
        .directory("modules")
        .directory("modules/user")
        .directory("modules/user/handler")
        .file(
            "modules/user/handler/handler.go",
            "package handler\n\nimport \"net/http\"\n\nfunc Register(mux *http.ServeMux) {\n\tmux.HandleFunc(\"/users\", func(w http.ResponseWriter, r *http.Request) {})\n}\n",
        )
        .directory("modules/user/service")
        .file(
            "modules/user/service/service.go",
            "package service\n\n// Service holds user business rules.\ntype Service struct{}\n",
        )
        .directory("modules/user/repository")
        .file(
            "modules/user/repository/repository.go",
            "package repository\n\n// Repository persists users.\ntype Repository struct{}\n",
        )
        .directory("modules/order")
        .directory("modules/order/handler")
        .file(
            "modules/order/handler/handler.go",
            "package handler\n\nimport \"net/http\"\n\nfunc Register(mux *http.ServeMux) {\n\tmux.HandleFunc(\"/orders\", func(w http.ResponseWriter, r *http.Request) {})\n}\n",
        )
        .directory("modules/order/service")
        .file(
            "modules/order/service/service.go",
            "package service\n\n// Service holds order business rules.\ntype Service struct{}\n",
        )
        .directory("modules/order/repository")
        .file(
            "modules/order/repository/repository.go",
            "package repository\n\n// Repository persists orders.\ntype Repository struct{}\n",
        )
        .directory("pkg")
        .directory("pkg/logger")
        .file(
            "pkg/logger/logger.go",
            "package logger\n\nimport \"log\"\n\nfunc New(prefix string) *log.Logger {\n\treturn log.New(log.Writer(), prefix+\" \", log.LstdFlags)\n}\n",
        )
        .file("go.mod", GO_MOD)
        .file("README.md", README)
        .file(".gitignore", GITIGNORE)
        .build()
}

// ── monorepo ──────────────────────────────────────────────────────────────────

fn monorepo() -> Result<ArchitectureTemplate, DomainError> {
    ArchitectureTemplate::builder(ArchitectureName::Monorepo)
        .file(
            "go.work",
            "go 1.21\n\nuse (\n\t./libs/shared\n\t./services/api\n\t./services/worker\n)\n",
        )
        .directory("services")
        .directory("services/api")
        .file("services/api/go.mod", "module {{MODULE}}/services/api\n\ngo 1.21\n")
        .file(
            "services/api/main.go",
            r#"package main

import (
	"log"
	"net/http"

	"{{MODULE}}/libs/shared"
)

func main() {
	log.Printf("%s api starting", shared.ServiceName)
	log.Fatal(http.ListenAndServe(":8080", nil))
}
"#,
        )
        .directory("services/worker")
        .file(
            "services/worker/go.mod",
            "module {{MODULE}}/services/worker\n\ngo 1.21\n",
        )
        .file(
            "services/worker/main.go",
            r#"package main

import (
	"log"
	"time"

	"{{MODULE}}/libs/shared"
)

func main() {
	for range time.Tick(time.Minute) {
		log.Printf("%s worker tick", shared.ServiceName)
	}
}
"#,
        )
        .directory("libs")
        .directory("libs/shared")
        .file("libs/shared/go.mod", "module {{MODULE}}/libs/shared\n\ngo 1.21\n")
        .file(
            "libs/shared/shared.go",
            "package shared\n\n// ServiceName prefixes log lines of every service.\nconst ServiceName = \"{{MODULE_NAME}}\"\n",
        )
        .file("README.md", README)
        .file(".gitignore", GITIGNORE)
        .build()
}

// ── cqrs ──────────────────────────────────────────────────────────────────────

fn cqrs() -> Result<ArchitectureTemplate, DomainError> {
    ArchitectureTemplate::builder(ArchitectureName::Cqrs)
        .directory("cmd")
        .directory("cmd/app")
        .file("cmd/app/main.go", SERVER_MAIN)
        .directory("internal")
        .directory("internal/commands")
        .file(
            "internal/commands/create_user.go",
            r#"package commands

import "{{MODULE}}/internal/events"

type CreateUser struct {
	ID   string
	Name string
}

type CreateUserHandler struct {
	bus events.Bus
}

func (h *CreateUserHandler) Handle(cmd CreateUser) error {
	return h.bus.Publish(events.UserCreated{ID: cmd.ID, Name: cmd.Name})
}
"#,
        )
        .directory("internal/queries")
        .file(
            "internal/queries/get_user.go",
            r#"package queries

import "{{MODULE}}/internal/models"

type GetUser struct {
	ID string
}

type GetUserHandler struct {
	users map[string]models.UserView
}

func (h *GetUserHandler) Handle(q GetUser) (models.UserView, bool) {
	u, ok := h.users[q.ID]
	return u, ok
}
"#,
        )
        .directory("internal/events")
        .file(
            "internal/events/events.go",
            r#"package events

type UserCreated struct {
	ID   string
	Name string
}

// Bus delivers events to projections.
type Bus interface {
	Publish(event any) error
}
"#,
        )
        .directory("internal/models")
        .file(
            "internal/models/user_view.go",
            "package models\n\n// UserView is the read model for users.\ntype UserView struct {\n\tID   string\n\tName string\n}\n",
        )
        .directory("internal/handlers")
        .file(
            "internal/handlers/http.go",
            r#"package handlers

import (
	"net/http"

	"{{MODULE}}/internal/commands"
	"{{MODULE}}/internal/queries"
)

type API struct {
	Commands *commands.CreateUserHandler
	Queries  *queries.GetUserHandler
}

func (a *API) Routes(mux *http.ServeMux) {
	mux.HandleFunc("/users", func(w http.ResponseWriter, r *http.Request) {})
}
"#,
        )
        .file("go.mod", GO_MOD)
        .file("README.md", README)
        .file(".gitignore", GITIGNORE)
        .build()
}

// ── onion ─────────────────────────────────────────────────────────────────────

fn onion() -> Result<ArchitectureTemplate, DomainError> {
    ArchitectureTemplate::builder(ArchitectureName::Onion)
        .directory("cmd")
        .directory("cmd/app")
        .file(
            "cmd/app/main.go",
            r#"package main

import (
	"log"
	"net/http"

	"{{MODULE}}/internal/api"
	"{{MODULE}}/internal/infrastructure"
	"{{MODULE}}/internal/services"
)

func main() {
	svc := services.NewUserService(infrastructure.NewMemoryUserRepository())

	log.Fatal(http.ListenAndServe(":8080", api.NewRouter(svc)))
}
"#,
        )
        .directory("internal")
        .directory("internal/domain")
        .file(
            "internal/domain/user.go",
            r#"package domain

type User struct {
	ID   string
	Name string
}

type UserRepository interface {
	Get(id string) (*User, error)
}
"#,
        )
        .directory("internal/services")
        .file(
            "internal/services/user_service.go",
            r#"package services

import "{{MODULE}}/internal/domain"

type UserService struct {
	repo domain.UserRepository
}

func NewUserService(repo domain.UserRepository) *UserService {
	return &UserService{repo: repo}
}

func (s *UserService) Get(id string) (*domain.User, error) {
	return s.repo.Get(id)
}
"#,
        )
        .directory("internal/infrastructure")
        .file(
            "internal/infrastructure/memory_user_repository.go",
            r#"package infrastructure

import (
	"errors"

	"{{MODULE}}/internal/domain"
)

type memoryUserRepository struct {
	users map[string]*domain.User
}

func NewMemoryUserRepository() domain.UserRepository {
	return &memoryUserRepository{users: map[string]*domain.User{}}
}

func (r *memoryUserRepository) Get(id string) (*domain.User, error) {
	if u, ok := r.users[id]; ok {
		return u, nil
	}
	return nil, errors.New("user not found")
}
"#,
        )
        .directory("internal/api")
        .file(
            "internal/api/router.go",
            r#"package api

import (
	"net/http"

	"{{MODULE}}/internal/services"
)

func NewRouter(svc *services.UserService) http.Handler {
	mux := http.NewServeMux()
	mux.HandleFunc("/users", func(w http.ResponseWriter, r *http.Request) {
		if _, err := svc.Get(r.URL.Query().Get("id")); err != nil {
			http.Error(w, err.Error(), http.StatusNotFound)
		}
	})
	return mux
}
"#,
        )
        .file("go.mod", GO_MOD)
        .file("README.md", README)
        .file(".gitignore", GITIGNORE)
        .build()
}

// ── common ────────────────────────────────────────────────────────────────────

fn common() -> Result<ArchitectureTemplate, DomainError> {
    ArchitectureTemplate::builder(ArchitectureName::Common)
        .directory("cmd")
        .directory("cmd/app")
        .file(
            "cmd/app/main.go",
            r#"package main

import (
	"log"

	"{{MODULE}}/internal/app"
)

func main() {
	if err := app.Run(); err != nil {
		log.Fatal(err)
	}
}
"#,
        )
        .directory("internal")
        .directory("internal/app")
        .file(
            "internal/app/app.go",
            r#"package app

import (
	"log"
	"net/http"
)

// Run starts {{MODULE_NAME}}.
func Run() error {
	log.Println("starting {{MODULE_NAME}}")
	return http.ListenAndServe(":8080", nil)
}
"#,
        )
        .directory("pkg")
        .directory("pkg/version")
        .file(
            "pkg/version/version.go",
            "package version\n\n// Version is set at build time with -ldflags.\nvar Version = \"dev\"\n",
        )
        .directory("api")
        .file(
            "api/openapi.yaml",
            "openapi: 3.0.3\ninfo:\n  title: {{MODULE_NAME}}\n  version: 0.1.0\npaths: {}\n",
        )
        .directory("configs")
        .file("configs/config.yaml", "server:\n  addr: \":8080\"\n")
        .directory("scripts")
        .file(
            "scripts/build.sh",
            "#!/usr/bin/env sh\nset -e\ngo build -o bin/{{MODULE_NAME}} ./cmd/app\n",
        )
        .directory("test")
        .file("test/README.md", "Integration tests and test data live here.\n")
        .directory("docs")
        .file("docs/README.md", "# {{MODULE_NAME}} documentation\n")
        .file("go.mod", GO_MOD)
        .file(
            "Makefile",
            ".PHONY: build test\n\nbuild:\n\tgo build -o bin/{{MODULE_NAME}} ./cmd/app\n\ntest:\n\tgo test ./...\n",
        )
        .file("README.md", README)
        .file(".gitignore", GITIGNORE)
        .build()
}

// ── layered ───────────────────────────────────────────────────────────────────

fn layered() -> Result<ArchitectureTemplate, DomainError> {
    ArchitectureTemplate::builder(ArchitectureName::Layered)
        .directory("cmd")
        .directory("cmd/app")
        .file(
            "cmd/app/main.go",
            r#"package main

import (
	"log"
	"net/http"

	"{{MODULE}}/internal/business"
	"{{MODULE}}/internal/data"
	"{{MODULE}}/internal/presentation"
)

func main() {
	svc := business.NewUserService(data.NewUserStore())

	log.Fatal(http.ListenAndServe(":8080", presentation.NewHandler(svc)))
}
"#,
        )
        .directory("internal")
        .directory("internal/presentation")
        .file(
            "internal/presentation/handler.go",
            r#"package presentation

import (
	"net/http"

	"{{MODULE}}/internal/business"
)

func NewHandler(svc *business.UserService) http.Handler {
	mux := http.NewServeMux()
	mux.HandleFunc("/users", func(w http.ResponseWriter, r *http.Request) {
		_ = svc.Names()
	})
	return mux
}
"#,
        )
        .directory("internal/business")
        .file(
            "internal/business/user_service.go",
            r#"package business

import "{{MODULE}}/internal/data"

type UserService struct {
	store *data.UserStore
}

func NewUserService(store *data.UserStore) *UserService {
	return &UserService{store: store}
}

func (s *UserService) Names() []string {
	return s.store.All()
}
"#,
        )
        .directory("internal/data")
        .file(
            "internal/data/user_store.go",
            r#"package data

type UserStore struct {
	names []string
}

func NewUserStore() *UserStore {
	return &UserStore{}
}

func (s *UserStore) All() []string {
	return s.names
}
"#,
        )
        .file("go.mod", GO_MOD)
        .file("README.md", README)
        .file(".gitignore", GITIGNORE)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use archforge_core::domain::{RenderContext, TemplateNode};
    use archforge_core::domain::ModuleIdentifier;

    #[test]
    fn every_architecture_has_a_valid_template() {
        let templates = all_templates().unwrap();
        assert_eq!(templates.len(), ArchitectureName::ALL.len());
        for (template, arch) in templates.iter().zip(ArchitectureName::ALL) {
            assert_eq!(template.architecture, arch);
            assert!(template.validate().is_ok(), "{arch} is invalid");
        }
    }

    #[test]
    fn every_template_declares_its_module() {
        for template in all_templates().unwrap() {
            let declares = template.tree.nodes.iter().any(|n| match n {
                TemplateNode::File(f) => {
                    f.path.file_name() == "go.mod" && f.content.is_parameterized()
                }
                TemplateNode::Directory(_) => false,
            });
            assert!(declares, "{} has no go.mod", template.architecture);
        }
    }

    #[test]
    fn every_template_has_an_entry_point() {
        for template in all_templates().unwrap() {
            assert!(
                template.paths().any(|p| p.file_name() == "main.go"),
                "{} has no main.go",
                template.architecture
            );
        }
    }

    #[test]
    fn rendered_contents_have_no_markers_left() {
        let ctx = RenderContext::new(ModuleIdentifier::parse("github.com/user/project").unwrap());
        for template in all_templates().unwrap() {
            let structure = template.render(&ctx, "/out");
            for file in structure.files() {
                assert!(
                    !file.content.contains("{{MODULE"),
                    "{}: {} still has a marker",
                    template.architecture,
                    file.path
                );
            }
        }
    }

    #[test]
    fn flat_template_has_expected_entries() {
        let flat = template_for(ArchitectureName::Flat).unwrap();
        let paths: Vec<_> = flat.paths().map(|p| p.as_str()).collect();
        assert_eq!(
            paths,
            vec!["go.mod", "main.go", "handlers.go", "models.go", "README.md", ".gitignore"]
        );
    }
}
